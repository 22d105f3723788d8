use mysql_async::{consts::ColumnType, Column};
use rowmap_core::stmt::Value as CoreValue;

/// MySQL's `binary` collation id. Byte columns with any other charset hold text.
const BINARY_CHARSET: u16 = 63;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    pub fn to_mysql(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Bool(value) => mysql_async::Value::Int((*value).into()),
            CoreValue::Bytes(value) => mysql_async::Value::Bytes(value.clone()),
            CoreValue::F64(value) => mysql_async::Value::Double(*value),
            CoreValue::I64(value) => mysql_async::Value::Int(*value),
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::String(value) => mysql_async::Value::Bytes(value.as_bytes().to_vec()),
        }
    }

    /// Converts a value read from the given column.
    pub fn from_sql(value: mysql_async::Value, column: &Column) -> Self {
        use mysql_async::Value::*;

        let value = match value {
            NULL => CoreValue::Null,
            Int(v) => CoreValue::I64(v),
            UInt(v) => match i64::try_from(v) {
                Ok(v) => CoreValue::I64(v),
                Err(_) => CoreValue::String(v.to_string()),
            },
            Float(v) => CoreValue::F64(v.into()),
            Double(v) => CoreValue::F64(v),
            Bytes(bytes) => {
                if column.character_set() == BINARY_CHARSET && !is_textual(column) {
                    CoreValue::Bytes(bytes)
                } else {
                    match String::from_utf8(bytes) {
                        Ok(s) => CoreValue::String(s),
                        Err(err) => CoreValue::Bytes(err.into_bytes()),
                    }
                }
            }
            Date(year, month, day, hour, minute, second, micros) => {
                let mut s = format!("{year:04}-{month:02}-{day:02}");
                if column.column_type() != ColumnType::MYSQL_TYPE_DATE {
                    s.push_str(&format!(" {hour:02}:{minute:02}:{second:02}"));
                    if micros > 0 {
                        s.push_str(&format!(".{micros:06}"));
                    }
                }
                CoreValue::String(s)
            }
            Time(negative, days, hours, minutes, seconds, micros) => {
                let sign = if negative { "-" } else { "" };
                let hours = u32::from(hours) + days * 24;
                let mut s = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
                if micros > 0 {
                    s.push_str(&format!(".{micros:06}"));
                }
                CoreValue::String(s)
            }
        };

        Self(value)
    }
}

/// Numeric types travel as text in the text protocol, even with a binary charset.
fn is_textual(column: &Column) -> bool {
    matches!(
        column.column_type(),
        ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL
    )
}
