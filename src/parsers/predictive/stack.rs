use crate::grammar::Symbol;

/// A stack for an iterative predictive parser automaton. The end-of-input
/// marker sits at the bottom of the stack and is never popped.
#[derive(Debug)]
pub struct Stack {
    elements: Vec<Symbol>,
}

impl Stack {
    /// Creates a new stack holding the start symbol above the end-of-input
    /// marker
    pub fn new(start: Symbol) -> Stack {
        Stack {
            elements: vec![Symbol::EndOfInput, start],
        }
    }

    /// Returns true if nothing but the end-of-input marker is left
    pub fn is_exhausted(&self) -> bool {
        self.elements.len() <= 1
    }

    /// Returns true if the stack holds exactly the end-of-input marker
    pub fn is_bottom(&self) -> bool {
        self.elements == [Symbol::EndOfInput]
    }

    /// Pops the symbol at the top of the stack. Returns None once only the
    /// end-of-input marker is left.
    pub fn pop(&mut self) -> Option<Symbol> {
        if self.is_exhausted() {
            return None;
        }
        self.elements.pop()
    }

    /// Pushes the symbols of a production body in reverse order, so that its
    /// first symbol ends up on top. Pushes nothing for an ϵ-production.
    pub fn push_body(&mut self, body: &[Symbol]) {
        self.elements
            .extend(body.iter().rev().filter(|s| !s.is_e()).copied());
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
