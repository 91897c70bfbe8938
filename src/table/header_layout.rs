/// How the header line maps onto the columns of the data rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderLayout {
    /// The first header field labels the instance column and is discarded.
    #[default]
    LabelledInstances,

    /// Every header field names a solver; the instance column has no label.
    SolversOnly,
}

impl HeaderLayout {
    /// Solver names from the fields of the header line.
    pub fn solver_names(self, header: Vec<String>) -> Vec<String> {
        match self {
            HeaderLayout::LabelledInstances => header.into_iter().skip(1).collect(),
            HeaderLayout::SolversOnly => header,
        }
    }
}
