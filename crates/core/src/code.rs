//! Code table generation: from coding tree to prefix-free bit-strings.
//!
//! A preorder traversal accumulates a path string, appending "0" when
//! descending left and "1" when descending right; each leaf is assigned
//! the accumulated path as its code. Because codes correspond to distinct
//! leaves of a full binary tree, no code is a prefix of another.
//!
//! The decode table is the exact structural inverse of the encode table.
//! It is the only artifact that outlives an encoding run: serialized by
//! [`crate::table_io`], it lets a later process decode without ever
//! rebuilding the tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tree::Node;

/// Map from byte value to its bit-string code ('0'/'1' characters).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeTable {
    codes: BTreeMap<u8, String>,
}

impl EncodeTable {
    /// Derive codes for every leaf of the tree.
    ///
    /// A single-leaf root gets the fixed one-bit code "0": a zero-length
    /// code could never be matched during decode.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = BTreeMap::new();
        match root {
            Node::Leaf { byte, .. } => {
                codes.insert(*byte, "0".to_string());
            }
            Node::Internal { .. } => {
                collect_codes(root, String::new(), &mut codes);
            }
        }
        Self { codes }
    }

    /// Code for `byte`, if the byte occurred in the analyzed input.
    pub fn get(&self, byte: u8) -> Option<&str> {
        self.codes.get(&byte).map(String::as_str)
    }

    /// Number of coded bytes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no byte has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(byte, code)` pairs in ascending byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes.iter().map(|(&byte, code)| (byte, code.as_str()))
    }

    /// Invert into the decode table.
    ///
    /// The mapping is bijective (one leaf per byte, one code per leaf),
    /// so inversion never collides.
    pub fn invert(&self) -> DecodeTable {
        let codes = self
            .codes
            .iter()
            .map(|(&byte, code)| (code.clone(), byte))
            .collect();
        DecodeTable { codes }
    }
}

fn collect_codes(node: &Node, path: String, codes: &mut BTreeMap<u8, String>) {
    match node {
        Node::Leaf { byte, .. } => {
            codes.insert(*byte, path);
        }
        Node::Internal { left, right, .. } => {
            collect_codes(left, format!("{path}0"), codes);
            collect_codes(right, format!("{path}1"), codes);
        }
    }
}

/// Map from bit-string code to byte value.
///
/// Keys sort lexicographically, which gives the persisted form a stable
/// entry order (order is irrelevant to correctness either way).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodeTable {
    codes: BTreeMap<String, u8>,
}

impl DecodeTable {
    /// Byte for an exact code match, if present.
    pub fn get(&self, code: &str) -> Option<u8> {
        self.codes.get(code).copied()
    }

    /// Number of codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(code, byte)` pairs in lexicographic code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.codes.iter().map(|(code, &byte)| (code.as_str(), byte))
    }
}
