//! Shared macros for the record and operation modules.

/// Generate a closed-value enum that keeps unrecognised wire values.
///
/// Each variant maps to its exact (case-sensitive) wire constant. Values the
/// crate does not know yet land in `Unknown(String)` instead of failing, so
/// new service-side constants survive a decode/encode cycle untouched.
///
/// # Example
///
/// ```ignore
/// string_enum!(
///     /// Lifecycle state of a copy job.
///     CopyJobState {
///         Created => "CREATED",
///         Completed => "COMPLETED",
///     }
/// );
/// ```
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// A wire value not known to this version of the crate.
            Unknown(String),
        }

        impl $name {
            /// Every wire constant known to this version of the crate.
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            /// The wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )*
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )*
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}

/// Generate consuming `with_*` setters (and map helpers) for a record.
///
/// Three member kinds are supported, specified as a keyword before the
/// setter name(s):
///
/// - `value with_x => x: T` - replaces `x` with `Some(value.into())`
/// - `list with_x => x: T` - appends to `x`, creating the list on first use
/// - `map with_x, add_x_entry, clear_x_entries => x: V` - `with_x` replaces
///   the whole map, `add_x_entry` inserts one entry and rejects duplicate
///   keys, `clear_x_entries` resets the member to `None`
///
/// # Example
///
/// ```ignore
/// fluent_setters!(BackupSelection {
///     value with_selection_name => selection_name: String,
///     list with_resources => resources: String,
/// });
/// ```
macro_rules! fluent_setters {
    ($name:ident { $( $kind:ident $($method:ident),+ => $field:ident : $fty:ty ),* $(,)? }) => {
        impl $name {
            $( fluent_setters!(@member $kind [$($method),+] $field $fty); )*
        }
    };
    (@member value [$setter:ident] $field:ident $fty:ty) => {
        #[doc = concat!("Sets `", stringify!($field), "`.")]
        pub fn $setter(mut self, value: impl Into<$fty>) -> Self {
            self.$field = Some(value.into());
            self
        }
    };
    (@member list [$setter:ident] $field:ident $fty:ty) => {
        #[doc = concat!("Appends to `", stringify!($field), "`.")]
        pub fn $setter<T>(mut self, items: impl IntoIterator<Item = T>) -> Self
        where
            T: Into<$fty>,
        {
            self.$field
                .get_or_insert_with(Vec::new)
                .extend(items.into_iter().map(Into::into));
            self
        }
    };
    (@member map [$setter:ident, $add:ident, $clear:ident] $field:ident $fty:ty) => {
        #[doc = concat!("Replaces `", stringify!($field), "`.")]
        pub fn $setter<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
        where
            K: Into<String>,
            V: Into<$fty>,
        {
            self.$field = Some(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            );
            self
        }

        #[doc = concat!(
            "Adds one entry to `", stringify!($field),
            "`, failing with `DuplicateKey` if the key is already present."
        )]
        pub fn $add(
            &mut self,
            key: impl Into<String>,
            value: impl Into<$fty>,
        ) -> $crate::utils::error::Result<&mut Self> {
            $crate::model::insert_unique_entry(
                &mut self.$field,
                stringify!($field),
                key.into(),
                value.into(),
            )?;
            Ok(self)
        }

        #[doc = concat!("Removes every entry by resetting `", stringify!($field), "` to `None`.")]
        pub fn $clear(&mut self) -> &mut Self {
            self.$field = None;
            self
        }
    };
}

/// Implement `Display` for records through the shared debug renderer.
macro_rules! record_display {
    ($($name:ident),* $(,)?) => {
        $(
            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::model::display::render_record(self, f)
                }
            }
        )*
    };
}
