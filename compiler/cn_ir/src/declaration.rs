//! Declaration tree.
//!
//! A declaration is a blueprint for a constructible object: a name, an ordered
//! member list and an ordered child list. Members form a sequence rather than
//! a map. Duplicate keys are legal and every occurrence is kept in source
//! order, because the object factory binds members positionally by runtime
//! type. Consumers choose their own precedence via [`Declaration::member`]
//! (first occurrence) or [`Declaration::last_member`] (last occurrence).
//!
//! Trees nest to any depth, so the recursive trait impls grow the stack per
//! level and `Drop` unlinks children iteratively.

use std::fmt;

use cn_stack::ensure_sufficient_stack;

use crate::Value;

/// One `key=value` entry of a declaration's member list.
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub key: String,
    pub value: Value,
}

impl Member {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Member {
            key: key.into(),
            value,
        }
    }

    /// A bare `key` member, which stands for `key=true`.
    pub fn flag(key: impl Into<String>) -> Self {
        Member::new(key, Value::Bool(true))
    }
}

/// A parsed declaration node.
#[derive(Default)]
pub struct Declaration {
    pub name: String,
    pub members: Vec<Member>,
    pub children: Vec<Declaration>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, members: Vec<Member>, children: Vec<Declaration>) -> Self {
        Declaration {
            name: name.into(),
            members,
            children,
        }
    }

    /// A declaration with neither members nor children.
    pub fn leaf(name: impl Into<String>) -> Self {
        Declaration::new(name, Vec::new(), Vec::new())
    }

    #[must_use]
    pub fn with_member(mut self, key: impl Into<String>, value: Value) -> Self {
        self.members.push(Member::new(key, value));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Declaration) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.members.is_empty() && self.children.is_empty()
    }

    /// First member value with this key.
    pub fn member(&self, key: &str) -> Option<&Value> {
        self.members.iter().find(|m| m.key == key).map(|m| &m.value)
    }

    /// Last member value with this key.
    pub fn last_member(&self, key: &str) -> Option<&Value> {
        self.members
            .iter()
            .rev()
            .find(|m| m.key == key)
            .map(|m| &m.value)
    }

    /// Every member value with this key, in source order.
    pub fn members_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.members
            .iter()
            .filter(move |m| m.key == key)
            .map(|m| &m.value)
    }

    /// Whether the last member with this key is `true`.
    pub fn has_flag(&self, key: &str) -> bool {
        matches!(self.last_member(key), Some(Value::Bool(true)))
    }

    /// Depth of the tree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        for (_, depth) in self.walk() {
            max = max.max(depth);
        }
        max + 1
    }

    /// Depth-first, pre-order traversal yielding each node with its depth
    /// below this one (the root is depth 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(self, 0)],
        }
    }
}

impl Clone for Declaration {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Declaration {
            name: self.name.clone(),
            members: self.members.clone(),
            children: self.children.clone(),
        })
    }
}

impl PartialEq for Declaration {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| {
            self.name == other.name
                && self.members == other.members
                && self.children == other.children
        })
    }
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.debug_struct("Declaration")
                .field("name", &self.name)
                .field("members", &self.members)
                .field("children", &self.children)
                .finish()
        })
    }
}

impl Drop for Declaration {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

/// Iterator returned by [`Declaration::walk`].
pub struct Walk<'a> {
    stack: Vec<(&'a Declaration, usize)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a Declaration, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        Some((node, depth))
    }
}
