#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use beankit_core::bean::{Bean, Describable, FromProperty, IntoProperty, PropertyDescriptor};
use beankit_core::errors::{BeanError, Result};
use beankit_core::model::{PropertyBag, PropertyKind, PropertyValue, Record};
use beankit_core::{impl_bean, impl_replicate, Replicate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Person / Address
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl IntoProperty for Gender {
    const KIND: PropertyKind = PropertyKind::Reference;

    fn to_property(&self) -> Result<PropertyValue> {
        Ok(PropertyValue::from(match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }))
    }
}

impl FromProperty for Gender {
    fn from_property(value: PropertyValue) -> Result<Self> {
        match value.as_text() {
            Some("MALE") => Ok(Gender::Male),
            Some("FEMALE") => Ok(Gender::Female),
            _ => Err(BeanError::InvalidArgument {
                op: "from_property".to_string(),
                reason: format!("not a gender: {:?}", value),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub number: i32,
    pub city: Option<String>,
}

impl_bean!(Address { street, number, city });

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub gender: Gender,
    pub age: i32,
    pub married: bool,
    pub address: Option<Address>,
}

impl_bean!(Person {
    name,
    nickname,
    gender,
    age,
    married,
    address,
});
impl_replicate!(Person: serial, native, instantiate);

pub fn person(name: &str, gender: Gender) -> Person {
    Person {
        name: Some(name.to_string()),
        gender,
        ..Person::default()
    }
}

pub fn obelix() -> Person {
    Person {
        name: Some("obelix".to_string()),
        nickname: None,
        gender: Gender::Male,
        age: 35,
        married: false,
        address: Some(Address {
            street: "Menhir Lane".to_string(),
            number: 3,
            city: Some("Armorica".to_string()),
        }),
    }
}

// ---------------------------------------------------------------------------
// Settings: one property per primitive kind plus reference kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub enabled: bool,
    pub initial: char,
    pub level: i8,
    pub port: i16,
    pub retries: i32,
    pub timeout_ms: i64,
    pub ratio: f32,
    pub weight: f64,
    pub label: Option<String>,
    pub limit: Option<i32>,
    pub tags: Vec<String>,
}

impl_bean!(Settings {
    enabled,
    initial,
    level,
    port,
    retries,
    timeout_ms,
    ratio,
    weight,
    label,
    limit,
    tags,
});

pub fn configured_settings() -> Settings {
    Settings {
        enabled: true,
        initial: 'a',
        level: 3,
        port: 8080,
        retries: 5,
        timeout_ms: 30_000,
        ratio: 0.5,
        weight: 1.25,
        label: Some("primary".to_string()),
        limit: Some(10),
        tags: vec!["a".to_string()],
    }
}

// ---------------------------------------------------------------------------
// Clone strategy fixtures
// ---------------------------------------------------------------------------

/// Offers only instantiate + property copy.
#[derive(Debug, Default, PartialEq)]
pub struct Widget {
    pub name: String,
    pub size: i64,
    pub color: Option<String>,
}

impl_bean!(Widget { name, size, color });
impl_replicate!(Widget: instantiate);

/// Offers only the native clone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    pub value: String,
}

impl_bean!(Token { value });
impl_replicate!(Token: native);

/// Offers no strategy at all.
#[derive(Debug, Default, PartialEq)]
pub struct Opaque {
    pub id: i32,
}

impl_bean!(Opaque { id });
impl_replicate!(Opaque);

/// Serialization always fails; instantiation is optional.
#[derive(Debug, Default, PartialEq)]
pub struct Fragile {
    pub id: i32,
}

impl_bean!(Fragile { id });

impl Replicate for Fragile {
    fn serial_round_trip(&self) -> Option<Result<Self>> {
        Some(Err(BeanError::Serialization {
            message: "stream corrupted".to_string(),
        }))
    }
}

/// Serialization fails but a blank instance can be built.
#[derive(Debug, Default, PartialEq)]
pub struct Recoverable {
    pub id: i32,
    pub note: Option<String>,
}

impl_bean!(Recoverable { id, note });

impl Replicate for Recoverable {
    fn serial_round_trip(&self) -> Option<Result<Self>> {
        Some(Err(BeanError::Serialization {
            message: "stream corrupted".to_string(),
        }))
    }

    fn instantiate() -> Option<Result<Self>> {
        Some(Ok(Recoverable::default()))
    }
}

/// Instantiation is offered but fails.
#[derive(Debug, Default, PartialEq)]
pub struct Sealed {
    pub id: i32,
}

impl_bean!(Sealed { id });

impl Replicate for Sealed {
    fn instantiate() -> Option<Result<Self>> {
        Some(Err(BeanError::Instantiation {
            type_name: "Sealed".to_string(),
            reason: "constructor is private".to_string(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Hand-written beans
// ---------------------------------------------------------------------------

/// A bean whose `score` setter rejects negative values and whose `id` is
/// read-only.
#[derive(Debug, Default, PartialEq)]
pub struct Guarded {
    pub id: i32,
    pub score: i32,
    pub title: Option<String>,
}

impl Describable for Guarded {
    fn type_name(&self) -> &str {
        "Guarded"
    }

    fn describe_properties(&self) -> Result<PropertyBag> {
        let mut bag = PropertyBag::new();
        bag.insert("class", PropertyValue::from("Guarded"));
        bag.insert("id", PropertyValue::Int(self.id));
        bag.insert("score", PropertyValue::Int(self.score));
        bag.insert("title", self.title.to_property()?);
        Ok(bag)
    }
}

impl Bean for Guarded {
    fn property_descriptors(&self) -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::read_only("id", beankit_core::bean::kind_of(&self.id)),
            PropertyDescriptor::read_write("score", beankit_core::bean::kind_of(&self.score)),
            PropertyDescriptor::read_write("title", PropertyKind::Reference),
        ]
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        match name {
            "score" => {
                let score = i32::from_property(value)?;
                if score < 0 {
                    return Err(BeanError::PropertyAccess {
                        type_name: "Guarded".to_string(),
                        property: "score".to_string(),
                        reason: "score must not be negative".to_string(),
                    });
                }
                self.score = score;
                Ok(())
            }
            "title" => {
                self.title = Option::<String>::from_property(value)?;
                Ok(())
            }
            other => Err(BeanError::UnknownProperty {
                type_name: "Guarded".to_string(),
                property: other.to_string(),
            }),
        }
    }
}

/// A describable whose accessors always fail.
pub struct Locked;

impl Describable for Locked {
    fn type_name(&self) -> &str {
        "Locked"
    }

    fn describe_properties(&self) -> Result<PropertyBag> {
        Err(BeanError::PropertyAccess {
            type_name: "Locked".to_string(),
            property: "secret".to_string(),
            reason: "access denied".to_string(),
        })
    }
}

/// A describable that pretends to be a `Person` but is something else.
pub struct Impostor;

impl Describable for Impostor {
    fn type_name(&self) -> &str {
        "Impostor"
    }

    fn describe_properties(&self) -> Result<PropertyBag> {
        Ok(PropertyBag::new())
    }
}

// ---------------------------------------------------------------------------
// Graph nodes with identity, for cycle detection
// ---------------------------------------------------------------------------

/// A node in a cyclic graph, described one hop deep.
///
/// `peer` is snapshotted with its identity and label only, and its own
/// `peer` link is emitted as a back-reference record to this node. That is
/// how a describer of a cyclic structure keeps its snapshot finite.
pub struct GraphNode {
    pub id: usize,
    pub label: String,
    pub peer_id: usize,
    pub peer_label: String,
}

impl Describable for GraphNode {
    fn type_name(&self) -> &str {
        "GraphNode"
    }

    fn describe_properties(&self) -> Result<PropertyBag> {
        let back_edge = Record::new(
            "GraphNode",
            [("label", PropertyValue::from(self.label.as_str()))]
                .into_iter()
                .collect(),
        )
        .with_identity(Some(self.id));
        let peer = Record::new(
            "GraphNode",
            [
                ("label", PropertyValue::from(self.peer_label.as_str())),
                ("peer", PropertyValue::Object(back_edge)),
            ]
            .into_iter()
            .collect(),
        )
        .with_identity(Some(self.peer_id));

        Ok([
            ("label", PropertyValue::from(self.label.as_str())),
            ("peer", PropertyValue::Object(peer)),
        ]
        .into_iter()
        .collect())
    }

    fn identity(&self) -> Option<usize> {
        Some(self.id)
    }
}

// ---------------------------------------------------------------------------
// Shared-ownership graphs and float readings
// ---------------------------------------------------------------------------

/// Singly linked node whose `next` can close a loop through `Rc`.
#[derive(Default)]
pub struct Link {
    pub label: String,
    pub next: RefCell<Option<Rc<Link>>>,
}

impl_bean!(Link { label, next });

/// Two links pointing at each other. Call [`unlink`] when done so the pair
/// is freed.
pub fn link_pair(first: &str, second: &str) -> (Rc<Link>, Rc<Link>) {
    let a = Rc::new(Link {
        label: first.to_string(),
        next: RefCell::new(None),
    });
    let b = Rc::new(Link {
        label: second.to_string(),
        next: RefCell::new(Some(Rc::clone(&a))),
    });
    *a.next.borrow_mut() = Some(Rc::clone(&b));
    (a, b)
}

pub fn unlink(link: &Link) {
    *link.next.borrow_mut() = None;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reading {
    pub value: f64,
}

impl_bean!(Reading { value });
