mod blog;
pub use blog::{Blog, Comment};

mod user;
pub use user::User;

use rowmap::stmt::Value;
use std::time::{SystemTime, UNIX_EPOCH};

fn next_id() -> Value {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    Value::String(format!("{millis:015}{}000", uuid::Uuid::new_v4().simple()))
}

fn now() -> Value {
    Value::F64(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64(),
    )
}
