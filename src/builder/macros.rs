//! Macros for declaring state machines and subjects with little boilerplate.

/// Generate a typed enum of state (or event) names.
///
/// Each variant maps to its snake_case string given after `=`. The enum gets
/// `as_str`, `ALL`, `AsRef<str>`, `Display`, `FromStr` and serde support, so
/// its values can be passed anywhere the machine expects a name.
///
/// # Example
///
/// ```
/// use simple_state_machine::state_enum;
///
/// state_enum! {
///     pub enum OrderState {
///         Draft = "draft",
///         Active = "active",
///         Archived = "archived",
///     }
/// }
///
/// assert_eq!(OrderState::Active.as_str(), "active");
/// assert_eq!("archived".parse::<OrderState>(), Ok(OrderState::Archived));
/// assert_eq!(OrderState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $value)]
                $variant
            ),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),*
                }
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)*
                    other => Err(::std::format!(
                        "unknown {} '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }
    };
}

/// Declare a lazily built, shared [`StateMachine`](crate::StateMachine).
///
/// Each line declares one event with its `from => to` pairs. Declaring an
/// event twice merges its pairs.
///
/// # Example
///
/// ```
/// use simple_state_machine::state_machine;
///
/// state_machine! {
///     pub static ORDER_MACHINE {
///         "activate" => { "draft" => "active" },
///         "archive" => { "draft" => "archived", "active" => "archived" },
///     }
/// }
///
/// assert_eq!(ORDER_MACHINE.lookup("archive", "active"), Some("archived"));
/// ```
#[macro_export]
macro_rules! state_machine {
    (
        $(#[$meta:meta])*
        $vis:vis static $name:ident {
            $(
                $event:expr => { $( $from:expr => $to:expr ),+ $(,)? }
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis static $name: ::std::sync::LazyLock<$crate::StateMachine> =
            ::std::sync::LazyLock::new(|| {
                let mut machine = $crate::StateMachine::new();
                $(
                    machine.event($event, [$( ($from, $to) ),+]);
                )*
                machine
            });
    };
}

/// Implement [`Subject`](crate::Subject) for a type that keeps its state in a
/// [`StateField`](crate::StateField).
///
/// With `machine = STATIC` the type also implements
/// [`Stateful`](crate::Stateful) against that shared machine. Types that
/// need custom hooks implement the traits by hand instead.
///
/// # Example
///
/// ```
/// use simple_state_machine::{impl_subject, StateField, Subject};
///
/// #[derive(Default)]
/// struct Lamp {
///     state: StateField,
/// }
///
/// impl_subject!(Lamp, state);
///
/// let mut lamp = Lamp::default();
/// lamp.set_initial_state("off");
/// assert!(lamp.is_state("off"));
/// ```
#[macro_export]
macro_rules! impl_subject {
    ($ty:ty, $field:ident) => {
        impl $crate::Subject for $ty {
            fn state(&self) -> ::std::option::Option<&str> {
                self.$field.get()
            }

            fn set_state(&mut self, state: &str) {
                self.$field.set(state);
            }
        }
    };
    ($ty:ty, $field:ident, machine = $machine:path) => {
        $crate::impl_subject!($ty, $field);

        impl $crate::Stateful for $ty {
            fn state_machine() -> &'static $crate::StateMachine {
                &$machine
            }
        }
    };
}
