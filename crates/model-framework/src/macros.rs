//! # Registration Macros
//!
//! [`model_schema!`](crate::model_schema) is the declaration surface of
//! the framework: given a field list, it emits the
//! [`Model`](crate::Model) impl with a cached field table, a
//! serde-bridged accessor pair for every exposed field, and inherent
//! typed accessors so the struct's own code never writes getter/setter
//! boilerplate either. [`data!`](crate::data) builds payloads from
//! JSON-object syntax.

/// Registers a struct as a [`Model`](crate::Model).
///
/// Invoke it in the module that defines the struct (the generated
/// accessors read the struct's fields directly):
///
/// ```
/// use model_framework::{model_schema, Model};
///
/// #[derive(Debug, Default, Clone)]
/// struct Contact {
///     name: Option<String>,
///     phone: Option<String>,
/// }
///
/// model_schema! {
///     Contact {
///         protected name: Option<String>,
///         protected phone: Option<String>,
///     }
/// }
///
/// let mut contact = Contact::default();
/// contact.set_name("Ada".to_string());
/// assert_eq!(contact.get("name").unwrap(), "Ada");
/// assert_eq!(contact.call("getName", vec![]).unwrap(), "Ada");
/// ```
///
/// # Field forms
///
/// - `public name: Ty,` / `protected name: Ty,`: exposed field with a
///   generated accessor pair and inherent typed accessors
///   (`fn name(&self) -> &Ty`, `fn set_name(&mut self, impl Into<Ty>)`).
/// - `protected name: Ty { get = path, set = path },`: exposed field
///   with a hand-written accessor pair; nothing is generated for it, and
///   the pair shadows the generic fallback on every surface.
/// - `private name,`: the name resolves, access is always refused.
/// - `static name,`: type-level entry; resolves, access always refused.
///
/// A leading `construct(args: Ty) = path;` clause routes
/// [`Model::construct`](crate::Model::construct) through `path` with the
/// given positional-argument type; without it the type constructs via
/// `Default`.
///
/// Exposed field types must implement `serde::Serialize` and
/// `serde::de::DeserializeOwned`; models with unset-able fields use
/// `Option<T>`, which reads back as JSON `null` until assigned.
#[macro_export]
macro_rules! model_schema {
    ($model:ident { construct(args: $args:ty) = $ctor:path; $($fields:tt)* }) => {
        $crate::model_schema!(@impl $model, $args, $ctor, $($fields)*);
    };
    ($model:ident { $($fields:tt)* }) => {
        $crate::model_schema!(@impl $model, (), $crate::model::default_construct, $($fields)*);
    };

    (@impl $model:ident, $args:ty, $ctor:path, $($fields:tt)*) => {
        impl $crate::Model for $model {
            type ConstructorArgs = $args;

            fn schema() -> &'static $crate::ModelSchema<Self> {
                static SCHEMA: ::std::sync::OnceLock<$crate::ModelSchema<$model>> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    $crate::model_schema!(@build $model, $crate::ModelSchema::builder(), $($fields)*)
                        .build()
                        .unwrap_or_else(|error| panic!("{} schema: {error}", stringify!($model)))
                })
            }

            fn construct(args: $args) -> Self {
                $ctor(args)
            }
        }

        $crate::model_schema!(@accessors $model, $($fields)*);
    };

    // --- Field-table construction (expression position) ---

    (@build $model:ident, $builder:expr,) => { $builder };
    (@build $model:ident, $builder:expr, private $name:ident , $($rest:tt)*) => {
        $crate::model_schema!(@build $model,
            $builder.field($crate::FieldDescriptor::private(stringify!($name))),
            $($rest)*)
    };
    (@build $model:ident, $builder:expr, static $name:ident , $($rest:tt)*) => {
        $crate::model_schema!(@build $model,
            $builder.field($crate::FieldDescriptor::static_entry(stringify!($name))),
            $($rest)*)
    };
    (@build $model:ident, $builder:expr, $vis:ident $name:ident : $ty:ty { get = $get:path, set = $set:path } , $($rest:tt)*) => {
        $crate::model_schema!(@build $model,
            $builder.field($crate::FieldDescriptor::new(
                stringify!($name),
                $crate::model_schema!(@vis $vis),
                $crate::Accessor { get: $get, set: $set },
            )),
            $($rest)*)
    };
    (@build $model:ident, $builder:expr, $vis:ident $name:ident : $ty:ty , $($rest:tt)*) => {
        $crate::model_schema!(@build $model,
            $builder.field($crate::FieldDescriptor::new(
                stringify!($name),
                $crate::model_schema!(@vis $vis),
                $crate::Accessor {
                    get: |model: &$model| {
                        $crate::serde_json::to_value(&model.$name)
                            .unwrap_or($crate::Value::Null)
                    },
                    set: |model: &mut $model, value: $crate::Value| {
                        model.$name =
                            $crate::serde_json::from_value(value).map_err(|source| {
                                $crate::ModelError::InvalidValue {
                                    field: stringify!($name),
                                    source,
                                }
                            })?;
                        Ok($crate::serde_json::to_value(&model.$name)
                            .unwrap_or($crate::Value::Null))
                    },
                },
            )),
            $($rest)*)
    };

    (@vis public) => { $crate::Visibility::Public };
    (@vis protected) => { $crate::Visibility::Protected };

    // --- Inherent typed accessors (item position) ---

    (@accessors $model:ident,) => {};
    (@accessors $model:ident, private $name:ident , $($rest:tt)*) => {
        $crate::model_schema!(@accessors $model, $($rest)*);
    };
    (@accessors $model:ident, static $name:ident , $($rest:tt)*) => {
        $crate::model_schema!(@accessors $model, $($rest)*);
    };
    (@accessors $model:ident, $vis:ident $name:ident : $ty:ty { $($custom:tt)* } , $($rest:tt)*) => {
        // Hand-written accessors: generate nothing for this field.
        $crate::model_schema!(@accessors $model, $($rest)*);
    };
    (@accessors $model:ident, $vis:ident $name:ident : $ty:ty , $($rest:tt)*) => {
        impl $model {
            #[allow(dead_code)]
            pub fn $name(&self) -> &$ty {
                &self.$name
            }

            $crate::paste::paste! {
                #[allow(dead_code)]
                pub fn [<set_ $name>](&mut self, value: impl Into<$ty>) -> &mut Self {
                    self.$name = value.into();
                    self
                }
            }
        }

        $crate::model_schema!(@accessors $model, $($rest)*);
    };
}

/// Builds a [`DataMap`](crate::DataMap) from JSON-object syntax.
///
/// ```
/// use model_framework::data;
///
/// let payload = data! { "first_name": "John", "last-name": "Doe" };
/// assert_eq!(payload.len(), 2);
/// ```
#[macro_export]
macro_rules! data {
    ($($body:tt)*) => {
        match $crate::serde_json::json!({ $($body)* }) {
            $crate::Value::Object(map) => map,
            _ => unreachable!("object literal"),
        }
    };
}
