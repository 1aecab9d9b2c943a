// src/macros.rs
/// `String` from anything `String: From` accepts: labels, cell text, error fields.
/// `s!()` is an empty cell.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}
