//! Application layer: the redaction machinery.
//!
//! A document is a [`serde_json::Value`]. Objects are mappings; every other
//! variant (including arrays) is a leaf. Redaction produces an entirely
//! independent copy of the input with every sensitive key's value replaced,
//! at any depth. The input is never mutated.
//!
//! Two traversal strategies are provided:
//!
//! - [`Traversal::Recursive`]: depth-first structural recursion, copying
//!   node-by-node. Stack depth is bounded by the input's nesting depth.
//! - [`Traversal::Worklist`]: deep-copy-then-patch with an explicit queue of
//!   pending mapping nodes. Prefer this for very deep inputs where the call
//!   stack is a concern.
//!
//! Both strategies produce identical output; redaction is order-independent
//! across sibling keys.

use std::collections::VecDeque;

use serde_json::{Map, Value};

use super::keys::SensitiveKeys;

/// Default placeholder substituted for sensitive values.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Traversal strategy used to visit mapping nodes.
///
/// The strategies are observationally equivalent; they differ only in how
/// the visit order is maintained (call stack vs. explicit queue).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Depth-first structural recursion. Stack-depth-bounded by input depth.
    #[default]
    Recursive,
    /// Breadth-first over an explicit queue. Bounded by memory, not the
    /// call stack.
    Worklist,
}

/// Redacts every occurrence of the sensitive keys in `document`, at any depth.
///
/// Returns a new document; `document` itself is left untouched. A matched
/// key's value is replaced by a clone of `replacement` wholesale - even if
/// that value is itself a mapping containing matching keys, it is discarded,
/// not descended into. A non-mapping `document` is returned as a plain copy.
///
/// This is the depth-first strategy; use a [`Redactor`] configured with
/// [`Traversal::Worklist`] for very deep inputs.
///
/// ## Example
/// ```rust
/// use logredact::{redact, SensitiveKeys};
/// use serde_json::json;
///
/// let document = json!({"user": "alice", "content": "…megabytes…"});
/// let keys = SensitiveKeys::single("content");
/// let redacted = redact(&document, &keys, &json!("too big to log"));
/// assert_eq!(redacted, json!({"user": "alice", "content": "too big to log"}));
/// ```
#[must_use]
pub fn redact(document: &Value, keys: &SensitiveKeys, replacement: &Value) -> Value {
    redact_recursive(document, keys, replacement)
}

fn redact_recursive(document: &Value, keys: &SensitiveKeys, replacement: &Value) -> Value {
    match document {
        Value::Object(mapping) => {
            let mut out = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                if keys.contains(key) {
                    out.insert(key.clone(), replacement.clone());
                } else if value.is_object() {
                    out.insert(key.clone(), redact_recursive(value, keys, replacement));
                } else {
                    out.insert(key.clone(), value.clone());
                }
            }
            Value::Object(out)
        }
        leaf => leaf.clone(),
    }
}

fn redact_worklist(document: &Value, keys: &SensitiveKeys, replacement: &Value) -> Value {
    let mut result = document.clone();
    let mut queue: VecDeque<&mut Value> = VecDeque::new();
    if result.is_object() {
        queue.push_back(&mut result);
    }
    while let Some(node) = queue.pop_front() {
        if let Value::Object(mapping) = node {
            for (key, value) in mapping.iter_mut() {
                if keys.contains(key) {
                    *value = replacement.clone();
                } else if value.is_object() {
                    queue.push_back(value);
                }
            }
        }
    }
    result
}

/// A reusable redaction configuration: the sensitive keys, the replacement
/// value, and the traversal strategy.
///
/// Redaction through a `Redactor` is a pure function of the input document;
/// the redactor holds no mutable state and is safe to share across threads.
///
/// ## Example
/// ```rust
/// use logredact::{Redactor, SensitiveKeys};
/// use serde_json::json;
///
/// let redactor = Redactor::new(SensitiveKeys::single("password"));
/// let redacted = redactor.redact(&json!({"password": "hunter2"}));
/// assert_eq!(redacted, json!({"password": "[REDACTED]"}));
/// ```
#[derive(Clone, Debug)]
pub struct Redactor {
    keys: SensitiveKeys,
    replacement: Value,
    traversal: Traversal,
}

impl Redactor {
    /// Constructs a redactor for the given keys, replacing matched values
    /// with [`REDACTED_PLACEHOLDER`] using the recursive strategy.
    #[must_use]
    pub fn new(keys: SensitiveKeys) -> Self {
        Self {
            keys,
            replacement: Value::String(REDACTED_PLACEHOLDER.to_string()),
            traversal: Traversal::default(),
        }
    }

    /// Uses a specific replacement value.
    #[must_use]
    pub fn with_replacement<V>(mut self, replacement: V) -> Self
    where
        V: Into<Value>,
    {
        self.replacement = replacement.into();
        self
    }

    /// Uses a specific traversal strategy.
    #[must_use]
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Returns the key set this redactor matches against.
    pub fn keys(&self) -> &SensitiveKeys {
        &self.keys
    }

    /// Returns the value substituted for matched keys.
    pub fn replacement(&self) -> &Value {
        &self.replacement
    }

    /// Redacts `document`, returning a fresh, independently-owned copy.
    ///
    /// The input is never mutated. See [`redact`] for the full contract.
    #[must_use]
    pub fn redact(&self, document: &Value) -> Value {
        match self.traversal {
            Traversal::Recursive => redact_recursive(document, &self.keys, &self.replacement),
            Traversal::Worklist => redact_worklist(document, &self.keys, &self.replacement),
        }
    }

    /// Runs `f` against a redacted view of `document`, then drops the view.
    ///
    /// The redacted copy lives only for the duration of the call, so large
    /// replacement payloads do not linger after the log line is emitted:
    ///
    /// ```rust
    /// use logredact::{Redactor, SensitiveKeys};
    /// use serde_json::json;
    ///
    /// let redactor = Redactor::new(SensitiveKeys::single("content"));
    /// let document = json!({"content": "…"});
    /// let line = redactor.with_redacted(&document, |view| format!("data={view}"));
    /// assert_eq!(line, r#"data={"content":"[REDACTED]"}"#);
    /// ```
    pub fn with_redacted<F, R>(&self, document: &Value, f: F) -> R
    where
        F: FnOnce(&Value) -> R,
    {
        let view = self.redact(document);
        f(&view)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{redact, Redactor, SensitiveKeys, Traversal, REDACTED_PLACEHOLDER};

    fn keys(names: &[&str]) -> SensitiveKeys {
        names.iter().copied().collect()
    }

    #[test]
    fn matched_value_is_replaced_at_top_level() {
        let document = json!({"a": "b", "content": "payload"});
        let redacted = redact(&document, &keys(&["content"]), &json!("gone"));
        assert_eq!(redacted, json!({"a": "b", "content": "gone"}));
    }

    #[test]
    fn matched_mapping_value_is_discarded_wholesale() {
        // The matched subtree contains a matching key at a deeper level; it
        // must not be visited, only replaced.
        let document = json!({"content": {"content": "inner", "x": 1}});
        let redacted = redact(&document, &keys(&["content"]), &json!("gone"));
        assert_eq!(redacted, json!({"content": "gone"}));
    }

    #[test]
    fn unmatched_mappings_are_recursed_into() {
        let document = json!({"outer": {"inner": {"content": "payload"}}});
        let redacted = redact(&document, &keys(&["content"]), &json!("gone"));
        assert_eq!(redacted, json!({"outer": {"inner": {"content": "gone"}}}));
    }

    #[test]
    fn leaf_root_is_copied_unchanged() {
        for document in [json!("leaf"), json!(42), json!(null), json!([1, 2])] {
            let redacted = redact(&document, &keys(&["content"]), &json!("gone"));
            assert_eq!(redacted, document);
        }
    }

    #[test]
    fn arrays_are_opaque_leaves() {
        // Objects nested inside arrays are out of scope and pass through.
        let document = json!({"items": [{"content": "payload"}]});
        let redacted = redact(&document, &keys(&["content"]), &json!("gone"));
        assert_eq!(redacted, document);
    }

    #[test]
    fn leaf_value_equal_to_a_key_name_is_irrelevant() {
        let document = json!({"a": "content"});
        let redacted = redact(&document, &keys(&["content"]), &json!("gone"));
        assert_eq!(redacted, document);
    }

    #[test]
    fn default_replacement_is_the_placeholder() {
        let redactor = Redactor::new(keys(&["token"]));
        let redacted = redactor.redact(&json!({"token": "abc"}));
        assert_eq!(redacted, json!({"token": REDACTED_PLACEHOLDER}));
    }

    #[test]
    fn replacement_accepts_any_value_kind() {
        let redactor = Redactor::new(keys(&["content"])).with_replacement(json!(null));
        assert_eq!(
            redactor.redact(&json!({"content": "x"})),
            json!({"content": null})
        );

        let redactor = Redactor::new(keys(&["content"])).with_replacement(0);
        assert_eq!(
            redactor.redact(&json!({"content": "x"})),
            json!({"content": 0})
        );
    }

    #[test]
    fn strategies_agree_on_nested_documents() {
        let document = json!({
            "a": {"content": "one", "b": {"content": "two", "keep": true}},
            "content": {"nested": "dropped"},
            "c": [1, {"content": "opaque"}],
        });
        let recursive = Redactor::new(keys(&["content"])).redact(&document);
        let worklist = Redactor::new(keys(&["content"]))
            .with_traversal(Traversal::Worklist)
            .redact(&document);
        assert_eq!(recursive, worklist);
    }

    #[test]
    fn worklist_handles_leaf_root() {
        let redactor = Redactor::new(keys(&["content"])).with_traversal(Traversal::Worklist);
        assert_eq!(redactor.redact(&json!("leaf")), json!("leaf"));
    }

    #[test]
    fn with_redacted_scopes_the_view() {
        let redactor = Redactor::new(keys(&["content"]));
        let document = json!({"content": "payload", "id": 7});
        let seen = redactor.with_redacted(&document, |view| {
            assert_eq!(view["content"], REDACTED_PLACEHOLDER);
            view["id"].clone()
        });
        assert_eq!(seen, json!(7));
        // The original is still intact after the view is gone.
        assert_eq!(document["content"], "payload");
    }

    #[test]
    fn input_is_never_mutated() {
        let document = json!({"content": {"deep": "payload"}, "a": 1});
        let snapshot: Value = document.clone();
        let _ = redact(&document, &keys(&["content", "deep"]), &json!("gone"));
        assert_eq!(document, snapshot);
    }
}
