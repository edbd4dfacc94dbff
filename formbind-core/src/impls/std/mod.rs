mod hashmap;

mod path;

mod sync;
