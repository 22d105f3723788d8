mod field;
pub use field::{
    BooleanField, Field, FieldDefault, FieldTy, FloatField, IntegerField, StringField, TextField,
};

mod model;
pub use model::{Model, Templates};

mod model_def;
pub use model_def::ModelDef;
