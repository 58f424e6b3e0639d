//! Node implementation for the Kaula Ternary Search Tree.
//!
//! Each node holds one character of a column and three owned edges: `lesser`
//! and `greater` lead to siblings in the same column, `equal` advances to the
//! next character.

/// An owned, optional child edge.
pub(crate) type Link = Option<Box<TstNode>>;

/// A node in the Kaula Ternary Search Tree.
#[derive(Debug, Clone)]
pub struct TstNode {
    /// Character stored at this position
    pub(crate) symbol: char,

    /// Whether the path ending here spells a stored word
    pub(crate) is_terminal: bool,

    /// Frequency of the stored word (only meaningful when terminal)
    pub(crate) frequency: u32,

    /// Siblings with a smaller symbol
    pub(crate) lesser: Link,

    /// Continuations of the current prefix
    pub(crate) equal: Link,

    /// Siblings with a greater symbol
    pub(crate) greater: Link,
}

impl TstNode {
    /// Creates a non-terminal leaf holding `symbol`.
    pub fn new(symbol: char) -> Self {
        Self {
            symbol,
            is_terminal: false,
            frequency: 0,
            lesser: None,
            equal: None,
            greater: None,
        }
    }

    /// Returns the stored word's frequency if this node ends a word.
    pub fn terminal_frequency(&self) -> Option<u32> {
        self.is_terminal.then_some(self.frequency)
    }
}
