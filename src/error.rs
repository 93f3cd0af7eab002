use crate::app::maze::MazeError;
use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    MazeError(MazeError),
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GameError(e) => write!(f, "ggez error: {}", e),
            ErrorType::MazeError(e) => write!(f, "invalid maze: {}", e),
        }
    }
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<MazeError> for Error {
    fn from(e: MazeError) -> Self {
        Self(ErrorType::MazeError(e), vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

// message first, then the trace from the outermost step inwards
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        for t in self.1.iter().rev() {
            write!(f, "\n in {}", t)?;
        }
        Ok(())
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)?;
        f.debug_list().entries(self.1.iter().rev()).finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            ErrorType::GameError(e) => Some(e),
            ErrorType::MazeError(e) => Some(e),
        }
    }
}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trace_is_printed_outermost_first() {
        let res: Result = Err(Error::from(MazeError::Empty));
        let err = res
            .with_trace_step("Maze::parse")
            .with_trace_step("App::new")
            .unwrap_err();

        let text = err.to_string();
        assert!(text.starts_with("invalid maze: maze layout has no rows"), "{}", text);
        let outer = text.find(" in App::new").unwrap();
        let inner = text.find(" in Maze::parse").unwrap();
        assert!(outer < inner, "{}", text);
    }

    #[test]
    fn test_source_is_the_maze_error() {
        let err = Error::from(MazeError::NoOpenCells).with_trace_step("Session::new");
        let source = std::error::Error::source(&err).map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("maze has no open cells within the board"));
    }
}
