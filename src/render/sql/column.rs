//! Column definition fragments

use tracing::debug;

use crate::error::{Result, SchemaError};
use crate::schema::{ColumnOptions, Kind};

/// Render a single column definition such as `email VARCHAR(255) NULL`.
///
/// The name is lowercased. Suffixes always come in the order
/// size, array, `NULL`, `PRIMARY KEY`.
pub fn convert_type_to_sql(name: &str, kind: Kind, options: &ColumnOptions) -> Result<String> {
    if kind.is_unsupported() {
        return Err(SchemaError::UnsupportedType {
            column: name.to_string(),
            kind: kind.to_string(),
        });
    }
    if kind == Kind::Boolean && options.array {
        return Err(SchemaError::BooleanArray {
            column: name.to_string(),
        });
    }
    if options.array && options.primary {
        return Err(SchemaError::PrimaryKeyArray {
            column: name.to_string(),
        });
    }
    if options.primary && options.nullable {
        return Err(SchemaError::PrimaryKeyNullable {
            column: name.to_string(),
        });
    }

    let size = match options.rendered_size() {
        Some(size) => format!("({})", size),
        None => String::new(),
    };
    let array = match (options.array, options.rendered_size()) {
        (true, Some(size)) => format!("[{}]", size),
        (true, None) => "[]".to_string(),
        (false, _) => String::new(),
    };

    let base = match kind {
        Kind::Boolean => "BOOL".to_string(),
        Kind::Date | Kind::String => format!("VARCHAR{}{}", size, array),
        Kind::Object => format!("JSONB{}{}", size, array),
        Kind::BigInt => format!("BIGINT{}", array),
        Kind::Number => format!("INTEGER{}", array),
        Kind::Float => format!("DOUBLE{}", array),
        other => {
            return Err(SchemaError::InvalidType {
                column: name.to_string(),
                kind: other.to_string(),
            });
        }
    };

    let mut col_def = format!("{} {}", name.to_lowercase(), base);
    if options.nullable {
        col_def.push_str(" NULL");
    }
    if options.primary {
        col_def.push_str(" PRIMARY KEY");
    }

    debug!("Rendered column {}", col_def);
    Ok(col_def)
}
