use std::collections::VecDeque;
use itertools::Itertools;
use log::debug;
use qmat::Rational;
use qmat_matrix::{Mat, MatTrait};
use super::err::err;
use super::locale::{Locale, Msg};

pub type Block = Vec<Vec<String>>;

/// Splits text into matrix blocks: one row per line, entries separated by 
/// whitespace, and a blank line closing the current block. 
/// Runs of blank lines count as one separator.
pub fn read_blocks(text: &str) -> VecDeque<Block> { 
    let mut blocks = VecDeque::new();
    let mut current: Block = vec![];

    for line in text.lines() { 
        let tokens = line.split_whitespace().map(String::from).collect_vec();
        if tokens.is_empty() { 
            if !current.is_empty() { 
                blocks.push_back(std::mem::take(&mut current));
            }
        } else { 
            current.push(tokens);
        }
    }

    if !current.is_empty() { 
        blocks.push_back(current);
    }

    blocks
}

pub struct Reader { 
    blocks: VecDeque<Block>,
    locale: Locale
}

impl Reader { 
    pub fn new(text: &str, locale: Locale) -> Self { 
        let blocks = read_blocks(text);
        debug!("read {} block(s)", blocks.len());
        Reader { blocks, locale }
    }

    /// Shape and cell validation is left to `Mat::parse_rows`.
    pub fn next_matrix(&mut self) -> Result<Mat<Rational>, Box<dyn std::error::Error>> { 
        let Some(block) = self.blocks.pop_front() else { 
            return err!("{}", self.locale.text(Msg::WrongMatrix))
        };

        let a = Mat::parse_rows(block)?;
        debug!("matrix: {}x{}", a.nrows(), a.ncols());

        Ok(a)
    }

    pub fn remaining(&self) -> usize { 
        self.blocks.len()
    }
}
