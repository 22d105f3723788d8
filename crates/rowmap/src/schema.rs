mod registry;
pub use registry::Registry;

pub use rowmap_core::schema::{
    BooleanField, Field, FieldDefault, FieldTy, FloatField, IntegerField, Model, ModelDef,
    StringField, Templates, TextField,
};
