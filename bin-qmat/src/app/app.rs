use std::io::Read;
use log::{info, warn};
use clap::{Parser, Subcommand};
use qmat::Rational;

use super::err::Error;
use super::input::Reader;
use super::locale::{Locale, Msg};
use super::output::Output;
use super::utils::measure;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd,

    /// Read matrices from a file instead of stdin. 
    /// One row per line, a blank line after each matrix.
    #[arg(short, long, global = true)]
    pub input: Option<String>,

    #[arg(short, long, global = true, default_value = "en")]
    pub lang: Locale,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(long, global = true, default_value = "0")]
    pub log: u8,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// Sum of the diagonal entries of a square matrix.
    Trace,
    Transpose,
    /// A + B
    Add,
    /// A - B
    Sub,
    /// A * B
    Mul,
    /// Multiply every entry by a number, e.g. `scale -1/2`.
    Scale { 
        #[arg(allow_hyphen_values = true)]
        factor: String 
    },
    /// Determinant by cofactor expansion.
    Det,
    /// Solve (A|b) by Cramer's rule.
    Solve,
}

impl CliArgs { 
    fn log_level(&self) -> log::LevelFilter { 
        use log::LevelFilter::*;
        match self.log {
            0 => Off,
            1 => Info,
            2 => Debug,
            _ => Trace,
        }
    }
}

pub struct App {
    pub args: CliArgs
}

impl App { 
    pub fn new() -> Self { 
        let args = CliArgs::parse();
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> { 
        self.init_logger()?;

        info!("args: {:?}", self.args);

        let text = self.read_input()?;
        let (res, time) = measure(||
            self.run_with(&text)
        );

        info!("time: {:?}", time);

        res
    }

    /// Runs the command on `text`, reporting errors in the selected language.
    pub fn run_with(&self, text: &str) -> Result<String, Box<dyn std::error::Error>> { 
        self.dispatch(text).map_err(|e| self.localize(e))
    }

    /// The error line printed to stderr when `run` fails.
    pub fn report(&self, e: &dyn std::error::Error) -> String { 
        self.output().error(e)
    }

    fn output(&self) -> Output { 
        Output::new(self.args.lang, !self.args.no_color)
    }

    fn init_logger(&self) -> Result<(), log::SetLoggerError> {
        let l = self.args.log_level();
        qmat::util::log::init_simple_logger(l, !self.args.no_color)
    }

    fn read_input(&self) -> Result<String, std::io::Error> { 
        match &self.args.input { 
            Some(path) => std::fs::read_to_string(path),
            None => { 
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }

    fn dispatch(&self, text: &str) -> Result<String, Box<dyn std::error::Error>> { 
        let mut input = Reader::new(text, self.args.lang);
        let out = self.output();

        let res = match &self.args.command { 
            Cmd::Trace => { 
                let a = input.next_matrix()?;
                out.value(Msg::Trace, &a.trace()?)
            },
            Cmd::Transpose => { 
                let a = input.next_matrix()?;
                out.matrix(Msg::Transpose, &a.transpose())
            },
            Cmd::Add => { 
                let a = input.next_matrix()?;
                let b = input.next_matrix()?;
                out.matrix(Msg::Sum, &a.checked_add(&b)?)
            },
            Cmd::Sub => { 
                let a = input.next_matrix()?;
                let b = input.next_matrix()?;
                out.matrix(Msg::Difference, &a.checked_sub(&b)?)
            },
            Cmd::Mul => { 
                let a = input.next_matrix()?;
                let b = input.next_matrix()?;
                out.matrix(Msg::Multiply, &a.checked_mul(&b)?)
            },
            Cmd::Scale { factor } => { 
                let k = factor.parse::<Rational>()?;
                let a = input.next_matrix()?;
                out.matrix(Msg::Multiply, &a.scale(&k))
            },
            Cmd::Det => { 
                let a = input.next_matrix()?;
                out.value(Msg::Determinant, &a.det()?)
            },
            Cmd::Solve => { 
                let a = input.next_matrix()?;
                out.solution(&a.solve()?)
            },
        };

        if input.remaining() > 0 { 
            warn!("ignored {} extra matrix block(s)", input.remaining());
        }

        Ok(res)
    }

    fn localize(&self, e: Box<dyn std::error::Error>) -> Box<dyn std::error::Error> { 
        let lang = self.args.lang;
        let msg = if let Some(e) = e.downcast_ref::<qmat_matrix::MatError>() { 
            Some(lang.describe(e))
        } else if let Some(e) = e.downcast_ref::<qmat::Error>() { 
            Some(lang.describe_num(e))
        } else { 
            None
        };

        match msg { 
            Some(msg) => Error { msg }.into(),
            None => e
        }
    }
}
