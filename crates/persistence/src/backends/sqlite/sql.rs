//! Compiles filters and sort directives into SQL over the `documents` table.
//!
//! Document fields are addressed with `json_extract(body, ?)`, the JSON path
//! always bound as a parameter. `_id` maps to the `id` column. User strings
//! are bound as parameters too and compared with the `casefold` function
//! through `=` and `instr`, so no input is ever read as a pattern.

use rusqlite::types::Value as SqlValue;
use serde_json::Value;

use crate::error::{BackendError, StorageResult};
use crate::query::{Filter, SortDirection, SortDirective};
use crate::types::ID_FIELD;

/// A SQL fragment with positional (`?`) parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SqlFragment {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl SqlFragment {
    fn push_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    fn bind(&mut self, value: impl Into<SqlValue>) {
        self.sql.push('?');
        self.params.push(value.into());
    }

    fn push_field_type(&mut self, path: &str) {
        self.push_sql("json_type(body, ");
        self.bind(path.to_string());
        self.push_sql(")");
    }

    fn push_field_value(&mut self, path: &str) {
        self.push_sql("json_extract(body, ");
        self.bind(path.to_string());
        self.push_sql(")");
    }
}

/// Builds the JSON path for a dotted field name: `metadata.views` becomes
/// `$."metadata"."views"`.
pub(crate) fn json_path(field: &str) -> StorageResult<String> {
    let mut path = String::from("$");
    for segment in field.split('.') {
        if segment.is_empty() || segment.contains('"') {
            return Err(BackendError::QueryError {
                message: format!("unsupported field name '{}'", field),
            }
            .into());
        }
        path.push_str(".\"");
        path.push_str(segment);
        path.push('"');
    }
    Ok(path)
}

/// Compiles `filter` into a boolean SQL expression.
pub(crate) fn compile_filter(filter: &Filter) -> StorageResult<SqlFragment> {
    let mut fragment = SqlFragment::default();
    write_filter(filter, &mut fragment)?;
    Ok(fragment)
}

fn write_filter(filter: &Filter, out: &mut SqlFragment) -> StorageResult<()> {
    match filter {
        Filter::All => out.push_sql("1"),

        Filter::Eq { field, value } if field == ID_FIELD => match value {
            Value::String(id) => {
                out.push_sql("id = ");
                out.bind(id.clone());
            }
            _ => out.push_sql("0"),
        },

        Filter::Eq { field, value } => {
            let path = json_path(field)?;
            out.push_sql("(");
            out.push_field_type(&path);
            match value {
                Value::Null => out.push_sql(" = 'null'"),
                Value::Bool(true) => out.push_sql(" = 'true'"),
                Value::Bool(false) => out.push_sql(" = 'false'"),
                Value::String(s) => {
                    out.push_sql(" = 'text' AND ");
                    out.push_field_value(&path);
                    out.push_sql(" = ");
                    out.bind(s.clone());
                }
                Value::Number(n) => {
                    out.push_sql(" IN ('integer', 'real') AND ");
                    out.push_field_value(&path);
                    out.push_sql(" = ");
                    match n.as_i64() {
                        Some(i) => out.bind(i),
                        None => out.bind(n.as_f64().unwrap_or(f64::NAN)),
                    }
                }
                Value::Array(_) | Value::Object(_) => {
                    out.push_sql(" IN ('array', 'object') AND ");
                    out.push_field_value(&path);
                    out.push_sql(" = json(");
                    out.bind(value.to_string());
                    out.push_sql(")");
                }
            }
            out.push_sql(")");
        }

        Filter::EqIgnoreCase { field, value } => {
            let path = json_path(field)?;
            out.push_sql("(");
            out.push_field_type(&path);
            out.push_sql(" = 'text' AND casefold(");
            out.push_field_value(&path);
            out.push_sql(") = casefold(");
            out.bind(value.clone());
            out.push_sql("))");
        }

        Filter::ContainsIgnoreCase { field, needle } => {
            let path = json_path(field)?;
            out.push_sql("(");
            out.push_field_type(&path);
            out.push_sql(" = 'text' AND instr(casefold(");
            out.push_field_value(&path);
            out.push_sql("), casefold(");
            out.bind(needle.clone());
            out.push_sql(")) > 0)");
        }

        Filter::AnyContainsIgnoreCase { field, needle } => {
            let path = json_path(field)?;
            out.push_sql("(");
            out.push_field_type(&path);
            out.push_sql(" = 'array' AND EXISTS (SELECT 1 FROM json_each(body, ");
            out.bind(path);
            out.push_sql(") AS e WHERE e.type = 'text' AND instr(casefold(e.value), casefold(");
            out.bind(needle.clone());
            out.push_sql(")) > 0))");
        }

        Filter::And(filters) => write_junction(filters, " AND ", "1", out)?,
        Filter::Or(filters) => write_junction(filters, " OR ", "0", out)?,
    }
    Ok(())
}

fn write_junction(
    filters: &[Filter],
    separator: &str,
    empty: &str,
    out: &mut SqlFragment,
) -> StorageResult<()> {
    if filters.is_empty() {
        out.push_sql(empty);
        return Ok(());
    }
    out.push_sql("(");
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            out.push_sql(separator);
        }
        write_filter(filter, out)?;
    }
    out.push_sql(")");
    Ok(())
}

/// Compiles an ORDER BY clause (without the keywords).
///
/// Always ends with `seq ASC`, so ties fall back to insertion order. SQLite
/// sorts NULL lowest, which places missing fields first ascending and last
/// descending.
pub(crate) fn compile_sort(sort: &[SortDirective]) -> StorageResult<SqlFragment> {
    let mut out = SqlFragment::default();
    for directive in sort {
        if directive.field == ID_FIELD {
            out.push_sql("id");
        } else {
            let path = json_path(&directive.field)?;
            out.push_field_value(&path);
        }
        match directive.direction {
            SortDirection::Ascending => out.push_sql(" ASC, "),
            SortDirection::Descending => out.push_sql(" DESC, "),
        }
    }
    out.push_sql("seq ASC");
    Ok(out)
}
