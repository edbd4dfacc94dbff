mod scalar;

mod char_str;

mod net;

mod option;

mod array;
mod tuple;

mod fn_ptr;
