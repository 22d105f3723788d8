use rowmap_core::{stmt::Value, Error, Result};

/// A `where` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Caller-supplied SQL with `?` placeholders and their arguments
    Sql { sql: String, args: Vec<Value> },

    /// Match on the model's primary key
    PrimaryKey(Value),
}

impl Filter {
    /// Wraps a caller-supplied clause, checking that every `?` has an
    /// argument.
    pub fn sql(sql: impl Into<String>, args: Vec<Value>) -> Result<Self> {
        let sql = sql.into();
        let placeholders = count_placeholders(&sql);

        if placeholders != args.len() {
            return Err(Error::query_argument(format!(
                "where clause has {placeholders} placeholders but {} arguments were given; where={sql}",
                args.len()
            )));
        }

        Ok(Self::Sql { sql, args })
    }

    pub fn primary_key(value: impl Into<Value>) -> Self {
        Self::PrimaryKey(value.into())
    }
}

/// Counts `?` outside of quoted strings and identifiers.
fn count_placeholders(sql: &str) -> usize {
    let mut count = 0;
    let mut quote = None;

    for ch in sql.chars() {
        match (quote, ch) {
            (None, '\'' | '"' | '`') => quote = Some(ch),
            (None, '?') => count += 1,
            (Some(open), _) if open == ch => quote = None,
            _ => {}
        }
    }

    count
}
