use std::fmt;

/// Classification of a canonical code sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodeType {
    OpenStableOdd,
    OpenStableNotOdd,
    OpenNotStable,
    ClosedStable,
    ClosedNotStable,
}

impl CodeType {
    /// Combine the three derived flags. Odd sequences are never closed and
    /// always stable, so any odd combination other than open-stable is `None`.
    pub(crate) fn from_flags(odd: bool, closed: bool, stable: bool) -> Option<CodeType> {
        match (odd, closed, stable) {
            (true, false, true) => Some(CodeType::OpenStableOdd),
            (false, false, true) => Some(CodeType::OpenStableNotOdd),
            (false, false, false) => Some(CodeType::OpenNotStable),
            (false, true, true) => Some(CodeType::ClosedStable),
            (false, true, false) => Some(CodeType::ClosedNotStable),
            (true, _, _) => None,
        }
    }

    pub fn is_stable(self) -> bool {
        matches!(
            self,
            CodeType::OpenStableOdd | CodeType::OpenStableNotOdd | CodeType::ClosedStable
        )
    }

    pub fn is_closed(self) -> bool {
        matches!(self, CodeType::ClosedStable | CodeType::ClosedNotStable)
    }

    /// Short label used in catalogs and logs.
    pub fn label(self) -> &'static str {
        match self {
            CodeType::OpenStableOdd => "OSO",
            CodeType::OpenStableNotOdd => "OSNO",
            CodeType::OpenNotStable => "ONS",
            CodeType::ClosedStable => "CS",
            CodeType::ClosedNotStable => "CNS",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
