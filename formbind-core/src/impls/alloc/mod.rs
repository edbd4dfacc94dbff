mod string;

mod boxed;

mod vec;
mod vec_deque;

mod btreemap;
