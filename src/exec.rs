use static_assertions::const_assert;

use crate::errors::ExecutionError;
use crate::instruction::Instruction;


pub const DEFAULT_TAPE_SIZE: usize = 30_000;

const_assert!(DEFAULT_TAPE_SIZE > 0);


/// Run-time configuration of the virtual machine.
#[derive(Debug, Clone, Copy)]
pub struct Config {

    /// Number of cells on the tape.
    pub tape_size: usize,

    /// Skip the body of a loop opened on a zero cell with a forward character
    /// scan instead of entering it and leaving through the normal `]` check.
    /// The scan stops at the first `]` and does not track nested brackets.
    pub skip_zero_loops: bool,

}

impl Default for Config {

    fn default() -> Self {
        Self {
            tape_size: DEFAULT_TAPE_SIZE,
            skip_zero_loops: false
        }
    }

}


struct Tape {
    /// Current cell index. Always in `0..cells.len()`.
    cursor: usize,
    cells: Box<[u32]>
}

impl Tape {

    pub fn new(size: usize) -> Self {
        Self {
            cursor: 0,
            cells: vec![0; size].into_boxed_slice()
        }
    }


    pub fn value(&self) -> u32 {
        self.cells[self.cursor]
    }


    pub fn cursor(&self) -> usize {
        self.cursor
    }


    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1) % self.cells.len();
    }


    pub fn move_left(&mut self) {
        self.cursor = (self.cursor + self.cells.len() - 1) % self.cells.len();
    }


    pub fn increment(&mut self) {
        self.cells[self.cursor] = self.cells[self.cursor].wrapping_add(1) % 256;
    }


    pub fn decrement(&mut self) {
        self.cells[self.cursor] = self.cells[self.cursor].wrapping_add(255) % 256;
    }


    /// Adds an input character's code point onto the current cell.
    /// The sum is not reduced modulo 256 here; a cell may sit above 255 until
    /// the next `+` or `-` reduces it.
    pub fn add_input(&mut self, code_point: u32) {
        self.cells[self.cursor] = self.cells[self.cursor].wrapping_add(code_point);
    }

}


struct Program<'a> {

    code: &'a [char],
    // Index of the next character in the code.
    program_counter: usize,

}

impl<'a> Program<'a> {

    pub fn new(code: &'a [char]) -> Self {
        Self {
            code,
            program_counter: 0,
        }
    }


    /// Index of the instruction returned by the last `fetch_instruction` call.
    pub fn current_index(&self) -> usize {
        self.program_counter - 1
    }


    pub fn fetch_instruction(&mut self) -> Option<Instruction> {
        let instruction = Instruction::from_char(*self.code.get(self.program_counter)?);
        self.program_counter += 1;
        Some(instruction)
    }


    pub fn jump_to(&mut self, target: usize) {
        self.program_counter = target;
    }


    /// Advances past the next `]`, ignoring nested brackets.
    /// Returns false if the program ends before a `]` is found.
    pub fn skip_past_loop_close(&mut self) -> bool {
        while let Some(&c) = self.code.get(self.program_counter) {
            self.program_counter += 1;
            if matches!(Instruction::from_char(c), Instruction::LoopClose) {
                return true;
            }
        }
        false
    }

}


/// Executes a program against a circular byte tape.
pub struct VM {

    config: Config,

}

impl VM {

    /// Instantiate a new VM with the given configuration.
    pub fn new(config: Config) -> Result<Self, ExecutionError> {
        if config.tape_size == 0 {
            return Err(ExecutionError::InvalidConfiguration { tape_size: config.tape_size });
        }
        Ok(Self {
            config
        })
    }


    /// Run `program` to completion and return the produced output.
    ///
    /// Every call gets its own zeroed tape, cursor, and loop stack, so no
    /// state is carried over between runs. `input` is addressed by the
    /// current cursor position, not by a separate read cursor, and reads past
    /// its length are ignored. Execution ends when the program counter passes
    /// the last character, even inside an open loop.
    pub fn run(&self, program: &str, input: &str) -> Result<String, ExecutionError> {

        let code: Vec<char> = program.chars().collect();
        let input: Vec<char> = input.chars().collect();

        let mut program = Program::new(&code);
        let mut tape = Tape::new(self.config.tape_size);
        let mut loop_stack: Vec<usize> = Vec::new();
        let mut output = String::new();

        while let Some(instruction) = program.fetch_instruction() {

            match instruction {

                Instruction::MoveRight => tape.move_right(),
                Instruction::MoveLeft => tape.move_left(),
                Instruction::Increment => tape.increment(),
                Instruction::Decrement => tape.decrement(),

                Instruction::Output => {
                    // Cells pushed above 255 by `,` keep their full code point.
                    let c = char::from_u32(tape.value()).unwrap_or(char::REPLACEMENT_CHARACTER);
                    output.push(c);
                },

                Instruction::Input => {
                    if let Some(&c) = input.get(tape.cursor()) {
                        tape.add_input(c as u32);
                    }
                },

                Instruction::LoopOpen => {
                    let index = program.current_index();
                    if tape.value() > 0 || !self.config.skip_zero_loops {
                        loop_stack.push(index);
                    } else if !program.skip_past_loop_close() {
                        return Err(ExecutionError::UnbalancedLoop { index });
                    }
                },

                Instruction::LoopClose => {
                    let index = program.current_index();
                    if tape.value() > 0 {
                        match loop_stack.last() {
                            // The open marker stays on the stack until the
                            // loop exits through the zero-cell branch.
                            Some(&open_index) => program.jump_to(open_index + 1),
                            None => return Err(ExecutionError::UnbalancedLoop { index })
                        }
                    } else if loop_stack.pop().is_none() {
                        return Err(ExecutionError::UnbalancedLoop { index });
                    }
                },

                Instruction::Comment => { /* Do nothing */ }

            }
        }

        Ok(output)
    }

}
