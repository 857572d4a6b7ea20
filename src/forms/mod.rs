//! Form payloads with the validation rules the dialogs enforce before
//! handing data to a controller.

pub mod order;
pub mod student;
