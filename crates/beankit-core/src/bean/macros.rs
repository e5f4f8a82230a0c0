//! Declarative implementations of the capability traits for plain structs.

/// Implement [`Describable`](crate::bean::Describable),
/// [`Bean`](crate::bean::Bean) and the property conversions for a struct.
///
/// Properties are the listed fields, described in the order given. Every
/// field type must implement [`IntoProperty`](crate::bean::IntoProperty) and
/// [`FromProperty`](crate::bean::FromProperty). The struct must implement
/// `Default` so it can be rebuilt when nested inside another bean.
///
/// The `readonly` form only implements `Describable` and `IntoProperty`, for
/// types that are compared and diffed but never written.
///
/// # Example
///
/// ```
/// use beankit_core::impl_bean;
/// use beankit_core::bean::{Bean, Describable};
/// use beankit_core::model::PropertyValue;
///
/// #[derive(Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl_bean!(Point { x, y });
///
/// let mut p = Point::default();
/// p.set_property("x", PropertyValue::Int(4)).unwrap();
/// let bag = p.describe_properties().unwrap();
/// assert_eq!(bag.get("x"), Some(&PropertyValue::Int(4)));
/// assert_eq!(p.type_name(), "Point");
/// ```
#[macro_export]
macro_rules! impl_bean {
    (readonly $ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::bean::Describable for $ty {
            fn type_name(&self) -> &str {
                stringify!($ty)
            }

            fn describe_properties(&self) -> $crate::Result<$crate::model::PropertyBag> {
                #[allow(unused_mut)]
                let mut bag = $crate::model::PropertyBag::new();
                $(
                    bag.insert(
                        stringify!($field),
                        $crate::bean::IntoProperty::to_property(&self.$field)?,
                    );
                )*
                Ok(bag)
            }
        }

        impl $crate::bean::IntoProperty for $ty {
            const KIND: $crate::model::PropertyKind = $crate::model::PropertyKind::Reference;

            fn to_property(&self) -> $crate::Result<$crate::model::PropertyValue> {
                $crate::bean::record_of(self)
            }
        }
    };
    ($ty:ident { $($field:ident),* $(,)? }) => {
        $crate::impl_bean!(readonly $ty { $($field),* });

        impl $crate::bean::Bean for $ty {
            fn property_descriptors(&self) -> Vec<$crate::bean::PropertyDescriptor> {
                vec![
                    $(
                        $crate::bean::PropertyDescriptor::read_write(
                            stringify!($field),
                            $crate::bean::kind_of(&self.$field),
                        ),
                    )*
                ]
            }

            fn set_property(
                &mut self,
                name: &str,
                value: $crate::model::PropertyValue,
            ) -> $crate::Result<()> {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field =
                                $crate::bean::convert_property(stringify!($ty), name, value)?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::errors::BeanError::UnknownProperty {
                        type_name: stringify!($ty).to_string(),
                        property: name.to_string(),
                    }),
                }
            }
        }

        impl $crate::bean::FromProperty for $ty {
            fn from_property(value: $crate::model::PropertyValue) -> $crate::Result<Self> {
                $crate::bean::bean_from_record(value)
            }
        }
    };
}

/// Implement [`Replicate`](crate::bean::Replicate) with the listed strategies.
///
/// - `serial`: serde_json round-trip, requires `Serialize + DeserializeOwned`
/// - `native`: `Clone::clone`
/// - `instantiate`: `Default::default`, followed by property copy
///
/// # Example
///
/// ```
/// use beankit_core::{impl_bean, impl_replicate};
/// use beankit_core::ops::clone::clone_object;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Counter {
///     hits: i64,
/// }
///
/// impl_bean!(Counter { hits });
/// impl_replicate!(Counter: instantiate);
///
/// let original = Counter { hits: 3 };
/// assert_eq!(clone_object(&original).unwrap(), original);
/// ```
#[macro_export]
macro_rules! impl_replicate {
    (@strategy serial) => {
        fn serial_round_trip(&self) -> Option<$crate::Result<Self>> {
            Some($crate::ops::clone::serial_round_trip(self))
        }
    };
    (@strategy native) => {
        fn native_clone(&self) -> Option<Self> {
            Some(::std::clone::Clone::clone(self))
        }
    };
    (@strategy instantiate) => {
        fn instantiate() -> Option<$crate::Result<Self>> {
            Some(Ok(::std::default::Default::default()))
        }
    };
    ($ty:ty $(: $($strategy:ident),+ $(,)?)?) => {
        impl $crate::bean::Replicate for $ty {
            $($( $crate::impl_replicate!(@strategy $strategy); )+)?
        }
    };
}
