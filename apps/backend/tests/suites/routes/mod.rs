mod error_shape;
mod todos_create;
mod todos_update;
mod validated_json;
