//! Behavior registry: declarative attachment of behaviors to elements.

use std::collections::HashMap;

use tracing::debug;

use crate::element::Element;
use crate::schema::{BehaviorSchema, BindError, BoundElement};

/// A UI behavior with an explicit lifecycle. `attach` receives the
/// schema-validated view of its element; it is only called after binding
/// succeeded, so accessors for declared targets/values always resolve.
pub trait UiBehavior: Send {
    fn schema(&self) -> &'static BehaviorSchema;

    fn attach(&mut self, element: &BoundElement) -> Result<(), BindError>;

    fn detach(&mut self);
}

type BehaviorFactory = Box<dyn Fn() -> Box<dyn UiBehavior> + Send + Sync>;

/// Maps `data-controller` names to behavior factories and drives the
/// attach lifecycle over an element tree.
#[derive(Default)]
pub struct BehaviorRegistry {
    factories: HashMap<&'static str, BehaviorFactory>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F, B>(&mut self, controller: &'static str, factory: F)
    where
        F: Fn() -> B + Send + Sync + 'static,
        B: UiBehavior + 'static,
    {
        self.factories
            .insert(controller, Box::new(move || Box::new(factory())));
    }

    /// Attach a behavior to every element in the tree whose
    /// `data-controller` matches a registered factory. Fails fast on the
    /// first schema violation.
    pub fn attach_all(&self, root: &Element) -> Result<Vec<Box<dyn UiBehavior>>, BindError> {
        let mut attached = Vec::new();
        for element in root.walk() {
            let Some(controller) = element.attr("data-controller") else {
                continue;
            };
            let Some(factory) = self.factories.get(controller) else {
                continue;
            };
            let mut behavior = factory();
            let bound = BoundElement::bind(behavior.schema(), element)?;
            behavior.attach(&bound)?;
            debug!(controller, "attached behavior");
            attached.push(behavior);
        }
        Ok(attached)
    }

    pub fn detach_all(behaviors: &mut Vec<Box<dyn UiBehavior>>) {
        for behavior in behaviors.iter_mut() {
            behavior.detach();
        }
        behaviors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{TargetSpec, ValueKind, ValueSpec};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const COUNTER_SCHEMA: BehaviorSchema = BehaviorSchema {
        controller: "counter",
        targets: &[TargetSpec {
            name: "display",
            tag: "span",
        }],
        values: &[ValueSpec {
            name: "start",
            kind: ValueKind::Number,
        }],
    };

    struct CounterBehavior {
        attaches: Arc<AtomicUsize>,
        detaches: Arc<AtomicUsize>,
        start: i64,
    }

    impl UiBehavior for CounterBehavior {
        fn schema(&self) -> &'static BehaviorSchema {
            &COUNTER_SCHEMA
        }

        fn attach(&mut self, element: &BoundElement) -> Result<(), BindError> {
            self.start = element.number("start").unwrap_or(0);
            self.attaches.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn detach(&mut self) {
            self.detaches.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counter_element(start: &str) -> Element {
        Element::new("div")
            .with_attr("data-controller", "counter")
            .with_attr("data-counter-start-value", start)
            .with_child(Element::new("span").with_attr("data-counter-target", "display"))
    }

    fn registry(attaches: Arc<AtomicUsize>, detaches: Arc<AtomicUsize>) -> BehaviorRegistry {
        let mut registry = BehaviorRegistry::new();
        registry.register("counter", move || CounterBehavior {
            attaches: attaches.clone(),
            detaches: detaches.clone(),
            start: 0,
        });
        registry
    }

    #[test]
    fn attaches_to_every_matching_element() {
        let attaches = Arc::new(AtomicUsize::new(0));
        let detaches = Arc::new(AtomicUsize::new(0));
        let registry = registry(attaches.clone(), detaches.clone());

        let root = Element::new("body")
            .with_child(counter_element("1"))
            .with_child(Element::new("div").with_child(counter_element("2")))
            .with_child(Element::new("p")); // no controller

        let mut behaviors = registry.attach_all(&root).unwrap();
        assert_eq!(behaviors.len(), 2);
        assert_eq!(attaches.load(Ordering::SeqCst), 2);

        BehaviorRegistry::detach_all(&mut behaviors);
        assert!(behaviors.is_empty());
        assert_eq!(detaches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn schema_violation_fails_attach_fast() {
        let attaches = Arc::new(AtomicUsize::new(0));
        let detaches = Arc::new(AtomicUsize::new(0));
        let registry = registry(attaches.clone(), detaches);

        // Missing the required display target.
        let root = Element::new("div")
            .with_attr("data-controller", "counter")
            .with_attr("data-counter-start-value", "1");
        // Ok carries the attached behaviors, which are not Debug.
        let err = registry.attach_all(&root).err().unwrap();
        assert!(matches!(err, BindError::MissingTarget { name: "display", .. }));
        assert_eq!(attaches.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unregistered_controllers_are_ignored() {
        let registry = BehaviorRegistry::new();
        let root = Element::new("div").with_attr("data-controller", "unknown");
        let behaviors = registry.attach_all(&root).unwrap();
        assert!(behaviors.is_empty());
    }
}
