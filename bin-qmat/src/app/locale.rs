use clap::ValueEnum;
use derive_more::Display;
use qmat_matrix::MatError;

/// Language of labels and error messages. 
/// Only the rendering layer looks at it.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Locale { 
    #[default] En, 
    Ru
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Msg { 
    Trace,
    Transpose,
    Sum,
    Difference,
    Multiply,
    Determinant,
    Result,
    WrongMatrix,
}

impl Locale { 
    pub fn text(&self, msg: Msg) -> &'static str { 
        use Msg::*;
        match self { 
            Locale::En => match msg { 
                Trace       => "Trace",
                Transpose   => "Transpose",
                Sum         => "Sum",
                Difference  => "Difference",
                Multiply    => "Multiply",
                Determinant => "Determinant",
                Result      => "Result",
                WrongMatrix => "Wrong matrix.",
            },
            Locale::Ru => match msg { 
                Trace       => "След",
                Transpose   => "Транспонированная матрица",
                Sum         => "Сумма",
                Difference  => "Разность",
                Multiply    => "Произведение",
                Determinant => "Определитель",
                Result      => "Результат",
                WrongMatrix => "Неправильная матрица.",
            },
        }
    }

    pub fn describe_num(&self, e: &qmat::Error) -> String { 
        use qmat::Error::*;
        match (self, e) { 
            (Locale::En, Parse(s)) => format!("Can't parse '{s}' into a fraction or number, or the number is too big."),
            (Locale::Ru, Parse(s)) => format!("Невозможно получить дробь или число из '{s}', или число слишком большое."),
            (Locale::En, DivideByZero) => "You can't divide a number by zero.".into(),
            (Locale::Ru, DivideByZero) => "Нельзя делить на нуль.".into(),
        }
    }

    pub fn describe(&self, e: &MatError) -> String { 
        use MatError::*;
        match self { 
            Locale::En => match e { 
                Num(e) => self.describe_num(e),
                TooBig { rows, cols } => 
                    format!("Matrix is too big: {rows}x{cols} (max 10x10)."),
                Empty => 
                    self.text(Msg::WrongMatrix).into(),
                RaggedRows { row, expected, found } => 
                    format!("Matrix should have equal number of elements on each line: line {} has {found}, expected {expected}.", row + 1),
                NotSquare { rows, cols } => 
                    format!("Matrix is not a square: {rows}x{cols}."),
                SizeMismatch { .. } => 
                    "Matrices have different sizes.".into(),
                MultiplyShape { .. } => 
                    "Column count of matrix 1 is not equal to row count of matrix 2.".into(),
                AugmentedShape { .. } => 
                    "Matrix should have (column count = row count + 1).".into(),
                SingularSystem => 
                    "The system is inconsistent or has infinitely many solutions.".into(),
            },
            Locale::Ru => match e { 
                Num(e) => self.describe_num(e),
                TooBig { rows, cols } => 
                    format!("Матрица слишком большая: {rows}x{cols} (макс. 10x10)."),
                Empty => 
                    self.text(Msg::WrongMatrix).into(),
                RaggedRows { row, expected, found } => 
                    format!("Матрица должна иметь одинаковое количество элементов на каждой строчке: в строке {} элементов {found}, ожидалось {expected}.", row + 1),
                NotSquare { rows, cols } => 
                    format!("Матрица не квадратична: {rows}x{cols}."),
                SizeMismatch { .. } => 
                    "Матрицы имеют разные размерности.".into(),
                MultiplyShape { .. } => 
                    "Количество столбцов матрицы 1 должно равняться количеству строк матрицы 2.".into(),
                AugmentedShape { .. } => 
                    "Матрица должна иметь правильную размерность (количество столбцов = количество строк + 1).".into(),
                SingularSystem => 
                    "СЛАУ не имеет решения или имеет много решений.".into(),
            },
        }
    }
}
