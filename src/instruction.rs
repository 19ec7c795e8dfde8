use std::mem;

use static_assertions::const_assert_eq;


pub const INSTRUCTION_SIZE: usize = 1;


/// Instructions of the tape machine. Each instruction is a single source character.
/// Any other character is a comment and has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Instruction {

    /// Move the cursor one cell to the right, wrapping to cell 0 past the end.
    MoveRight,
    /// Move the cursor one cell to the left, wrapping to the last cell before cell 0.
    MoveLeft,
    /// Increment the cell under the cursor modulo 256.
    Increment,
    /// Decrement the cell under the cursor modulo 256.
    Decrement,
    /// Append the character with the current cell's code point to the output.
    Output,
    /// Add the input character at the cursor position onto the current cell.
    Input,
    /// Open a loop.
    LoopOpen,
    /// Close a loop.
    LoopClose,

    /// No operation. Any non-instruction character.
    Comment

}

const_assert_eq!(mem::size_of::<Instruction>(), INSTRUCTION_SIZE);


impl Instruction {

    pub fn from_char(c: char) -> Self {
        match c {
            '>' => Instruction::MoveRight,
            '<' => Instruction::MoveLeft,
            '+' => Instruction::Increment,
            '-' => Instruction::Decrement,
            '.' => Instruction::Output,
            ',' => Instruction::Input,
            '[' => Instruction::LoopOpen,
            ']' => Instruction::LoopClose,
            _ => Instruction::Comment
        }
    }

}
