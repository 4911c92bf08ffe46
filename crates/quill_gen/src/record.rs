//! # Record analysis
//! Turns a `syn::DeriveInput` into the ordered list of columns a record maps
//! to. Field order here is the column, parameter and extraction order of all
//! generated code.

use crate::{attrs, columns, errors};
use proc_macro2::Span;
use proc_macro_error2::Diagnostic;
use std::collections::{HashMap, LinkedList};
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Fields, Ident, LitStr, Type};

pub struct FieldDef {
    /// The struct member, as written (may be a raw identifier).
    pub ident: Ident,
    pub column: String,
    pub ty: Type,
}

pub struct RecordDef {
    pub name: Ident,
    pub table: String,
    pub fields: Vec<FieldDef>,
}

/// Words SQLite parses as keywords. Column names are written bare in generated
/// statements, so none of these can be a column.
const SQL_KEYWORDS: &[&str] = &[
    "ABORT", "ACTION", "ADD", "AFTER", "ALL", "ALTER", "ALWAYS", "ANALYZE", "AND", "AS", "ASC",
    "ATTACH", "AUTOINCREMENT", "BEFORE", "BEGIN", "BETWEEN", "BY", "CASCADE", "CASE", "CAST",
    "CHECK", "COLLATE", "COLUMN", "COMMIT", "CONFLICT", "CONSTRAINT", "CREATE", "CROSS",
    "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "DATABASE", "DEFAULT",
    "DEFERRABLE", "DEFERRED", "DELETE", "DESC", "DETACH", "DISTINCT", "DO", "DROP", "EACH",
    "ELSE", "END", "ESCAPE", "EXCEPT", "EXCLUDE", "EXCLUSIVE", "EXISTS", "EXPLAIN", "FAIL",
    "FILTER", "FIRST", "FOLLOWING", "FOR", "FOREIGN", "FROM", "FULL", "GENERATED", "GLOB",
    "GROUP", "GROUPS", "HAVING", "IF", "IGNORE", "IMMEDIATE", "IN", "INDEX", "INDEXED",
    "INITIALLY", "INNER", "INSERT", "INSTEAD", "INTERSECT", "INTO", "IS", "ISNULL", "JOIN",
    "KEY", "LAST", "LEFT", "LIKE", "LIMIT", "MATCH", "MATERIALIZED", "NATURAL", "NO", "NOT",
    "NOTHING", "NOTNULL", "NULL", "NULLS", "OF", "OFFSET", "ON", "OR", "ORDER", "OTHERS",
    "OUTER", "OVER", "PARTITION", "PLAN", "PRAGMA", "PRECEDING", "PRIMARY", "QUERY", "RAISE",
    "RANGE", "RECURSIVE", "REFERENCES", "REGEXP", "REINDEX", "RELEASE", "RENAME", "REPLACE",
    "RESTRICT", "RETURNING", "RIGHT", "ROLLBACK", "ROW", "ROWS", "SAVEPOINT", "SELECT", "SET",
    "TABLE", "TEMP", "TEMPORARY", "THEN", "TIES", "TO", "TRANSACTION", "TRIGGER", "UNBOUNDED",
    "UNION", "UNIQUE", "UPDATE", "USING", "VACUUM", "VALUES", "VIEW", "VIRTUAL", "WHEN",
    "WHERE", "WINDOW", "WITH", "WITHOUT",
];

fn is_keyword(name: &str) -> bool {
    SQL_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(name))
}

fn valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Use the override if provided, otherwise the identifier.
/// - Table names are quoted in every statement, column names are not, so only
///   columns must avoid keywords.
fn resolve_name(
    ident: &Ident,
    rename: Option<LitStr>,
    is_column: bool,
    errors: &mut LinkedList<Diagnostic>,
) -> (String, Span) {
    let (name, span) = match rename {
        Some(lit) => (lit.value(), lit.span()),
        None => (ident.unraw().to_string(), ident.span()),
    };
    if !valid_name(&name) {
        errors.push_back(errors::invalid_name(span, &name));
    } else if is_column && is_keyword(&name) {
        errors.push_back(errors::reserved_name(span, &name));
    }
    (name, span)
}

impl RecordDef {
    pub fn analyse(item: DeriveInput) -> Result<Self, LinkedList<Diagnostic>> {
        let DeriveInput {
            attrs,
            ident: name,
            generics,
            data,
            ..
        } = item;

        let named = match data {
            Data::Struct(data) => match data.fields {
                Fields::Named(named) => named,
                other => return Err(LinkedList::from([errors::unnamed_fields(other.span(), &name)])),
            },
            Data::Enum(data) => {
                return Err(LinkedList::from([errors::not_a_struct(
                    data.enum_token.span,
                    "enum",
                )]))
            }
            Data::Union(data) => {
                return Err(LinkedList::from([errors::not_a_struct(
                    data.union_token.span,
                    "union",
                )]))
            }
        };

        let mut errors = LinkedList::new();

        if !generics.params.is_empty() || generics.where_clause.is_some() {
            errors.push_back(errors::generic_record(generics.span(), &name));
        }

        if named.named.is_empty() {
            errors.push_back(errors::no_fields(&name));
        }

        let table = match attrs::record_attrs(&attrs) {
            Ok(record_attrs) => resolve_name(&name, record_attrs.table, false, &mut errors).0,
            Err(mut es) => {
                errors.append(&mut es);
                name.unraw().to_string()
            }
        };

        let mut seen_columns: HashMap<String, Span> = HashMap::new();
        let mut fields = Vec::with_capacity(named.named.len());
        for field in named.named {
            let ident = field.ident.expect("named fields have identifiers");
            let rename = match attrs::field_attrs(&field.attrs) {
                Ok(field_attrs) => field_attrs.rename,
                Err(mut es) => {
                    errors.append(&mut es);
                    None
                }
            };
            let (column, span) = resolve_name(&ident, rename, true, &mut errors);

            if let Some(original) = seen_columns.get(&column) {
                errors.push_back(errors::column_redefined(&column, span, *original));
            } else {
                seen_columns.insert(column.clone(), span);
            }

            if let Err(e) = columns::check_column_type(&field.ty) {
                errors.push_back(e);
            }

            fields.push(FieldDef {
                ident,
                column,
                ty: field.ty,
            });
        }

        if errors.is_empty() {
            Ok(Self {
                name,
                table,
                fields,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn analyse(item: DeriveInput) -> Result<RecordDef, usize> {
        RecordDef::analyse(item).map_err(|es| es.len())
    }

    #[test]
    fn fields_in_declaration_order() {
        let Ok(record) = analyse(parse_quote! {
            struct Reading {
                id: i64,
                r#type: String,
                #[quill(rename = "value_raw")]
                value: f64,
                payload: Vec<u8>,
            }
        }) else {
            panic!("valid record rejected")
        };
        assert_eq!(record.table, "Reading");
        let columns: Vec<&str> = record.fields.iter().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, ["id", "type", "value_raw", "payload"]);
        assert_eq!(record.fields[1].ident.to_string(), "r#type");
    }

    #[test]
    fn table_rename() {
        let Ok(record) = analyse(parse_quote! {
            #[quill(table = "readings")]
            struct Reading { id: i64 }
        }) else {
            panic!("valid record rejected")
        };
        assert_eq!(record.table, "readings");
    }

    #[test]
    fn shapes_rejected() {
        assert_eq!(analyse(parse_quote! { struct Empty {} }).err(), Some(1));
        assert_eq!(analyse(parse_quote! { struct Unit; }).err(), Some(1));
        assert_eq!(analyse(parse_quote! { struct Pair(i32, i32); }).err(), Some(1));
        assert_eq!(analyse(parse_quote! { enum Choice { A, B } }).err(), Some(1));
        assert_eq!(
            analyse(parse_quote! { struct Wrapper<T> { inner: T } }).err(),
            Some(1)
        );
    }

    #[test]
    fn keyword_columns_rejected() {
        assert_eq!(
            analyse(parse_quote! { struct Ordered { id: i64, order: i64 } }).err(),
            Some(1)
        );
        assert_eq!(
            analyse(parse_quote! { struct Clause { r#where: String, Group: i32 } }).err(),
            Some(2)
        );
        assert_eq!(
            analyse(parse_quote! {
                struct Renamed {
                    #[quill(rename = "select")]
                    picked: i64,
                }
            })
            .err(),
            Some(1)
        );
    }

    #[test]
    fn keywords_allowed_as_tables_and_via_rename() {
        let Ok(record) = analyse(parse_quote! {
            struct Order {
                #[quill(rename = "sort_order")]
                order: i64,
                r#type: String,
            }
        }) else {
            panic!("valid record rejected")
        };
        assert_eq!(record.table, "Order");
        let columns: Vec<&str> = record.fields.iter().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, ["sort_order", "type"]);
    }

    #[test]
    fn all_field_errors_reported() {
        let errs = analyse(parse_quote! {
            struct Bad {
                flag: bool,
                #[quill(rename = "flag")]
                other: i32,
                #[quill(rename = "not valid")]
                spaced: i64,
                maybe: Option<String>,
            }
        })
        .err();
        assert_eq!(errs, Some(4));
    }
}
