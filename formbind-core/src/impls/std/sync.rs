use std::sync::mpsc::{Receiver, Sender, SyncSender};

use crate::{Def, Form, Shape, UnsupportedKind};

macro_rules! impl_form_for_channel {
    ($($ty:ident),+) => {
        $(
            impl<T: 'static> Form for $ty<T> {
                const SHAPE: &'static Shape = &const {
                    Shape::of::<$ty<T>>(stringify!($ty), Def::Unsupported(UnsupportedKind::Channel))
                };
            }
        )+
    };
}

impl_form_for_channel!(Sender, SyncSender, Receiver);
