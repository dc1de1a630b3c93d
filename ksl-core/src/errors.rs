pub use anyhow::{
    anyhow,
    bail,
    ensure,
};
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// This macro creates an enum which derives from thiserror::Error, and also creates constructor
// functions in snake case for each of the enum variants.  The (optional) visibility applies to
// both the enum and the constructors, so that a crate can expose its error type for downcasting.
#[macro_export]
macro_rules! err_impl {
    (@hidden $vis:vis $errtype:ident, $item:ident, String) => {
        paste! {
            $vis fn [<$item:snake>](in_: &str) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.into())}
            }
        }
    };

    (@hidden $vis:vis $errtype:ident, $item:ident, $($dtype:tt)::+) => {
        paste! {
            $vis fn [<$item:snake>](in_: &$($dtype)::+) -> anyhow::Error {
                anyhow!{$errtype::$item(in_.clone())}
            }
        }
    };

    ($vis:vis $errtype:ident,
        $(#[$errinfo:meta] $item:ident($($dtype:tt)::+),)+
    ) => {
        #[derive(Debug, Error)]
        $vis enum $errtype {
            $(#[$errinfo] $item($($dtype)::+)),+
        }

        impl $errtype {
            $(err_impl! {@hidden $vis $errtype, $item, $($dtype)::+})+
        }
    };
}

pub use err_impl;
