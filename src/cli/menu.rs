//! The numbered operation menu.

/// One entry of the interactive menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MenuCommand {
    Exit = 0,
    AddEdge = 1,
    RemoveEdge = 2,
    AddWeightedEdge = 3,
    EdgeExists = 4,
    VerticesAdjacent = 5,
    EdgesAdjacent = 6,
    EdgeIncidence = 7,
    SetVertexLabel = 8,
    GetVertexLabel = 9,
    SetVertexWeight = 10,
    GetVertexWeight = 11,
    SetEdgeLabel = 12,
    GetEdgeLabel = 13,
    SetEdgeWeight = 14,
    GetEdgeWeight = 15,
    IsEmpty = 16,
    IsComplete = 17,
    VertexCount = 18,
    EdgeCount = 19,
    Render = 20,
}

/// Menu entries in display order. Exit is listed last.
pub const COMMANDS: &[MenuCommand] = &[
    MenuCommand::AddEdge,
    MenuCommand::RemoveEdge,
    MenuCommand::AddWeightedEdge,
    MenuCommand::EdgeExists,
    MenuCommand::VerticesAdjacent,
    MenuCommand::EdgesAdjacent,
    MenuCommand::EdgeIncidence,
    MenuCommand::SetVertexLabel,
    MenuCommand::GetVertexLabel,
    MenuCommand::SetVertexWeight,
    MenuCommand::GetVertexWeight,
    MenuCommand::SetEdgeLabel,
    MenuCommand::GetEdgeLabel,
    MenuCommand::SetEdgeWeight,
    MenuCommand::GetEdgeWeight,
    MenuCommand::IsEmpty,
    MenuCommand::IsComplete,
    MenuCommand::VertexCount,
    MenuCommand::EdgeCount,
    MenuCommand::Render,
    MenuCommand::Exit,
];

impl MenuCommand {
    /// Look up a command by its menu number.
    pub fn from_number(value: i64) -> Option<Self> {
        let value = u8::try_from(value).ok()?;
        COMMANDS.iter().copied().find(|c| *c as u8 == value)
    }

    /// Menu text for this command.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::AddEdge => "Add edge",
            Self::RemoveEdge => "Remove edge",
            Self::AddWeightedEdge => "Add weighted edge",
            Self::EdgeExists => "Check whether an edge exists",
            Self::VerticesAdjacent => "Check adjacency between vertices",
            Self::EdgesAdjacent => "Check adjacency between edges",
            Self::EdgeIncidence => "Check incidence between edge and vertex",
            Self::SetVertexLabel => "Set vertex label",
            Self::GetVertexLabel => "Get vertex label",
            Self::SetVertexWeight => "Set vertex weight",
            Self::GetVertexWeight => "Get vertex weight",
            Self::SetEdgeLabel => "Set edge label",
            Self::GetEdgeLabel => "Get edge label",
            Self::SetEdgeWeight => "Set edge weight",
            Self::GetEdgeWeight => "Get edge weight",
            Self::IsEmpty => "Check whether the graph is empty",
            Self::IsComplete => "Check whether the graph is complete",
            Self::VertexCount => "Get number of vertices",
            Self::EdgeCount => "Get number of edges",
            Self::Render => "Print graph",
        }
    }
}

impl std::fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", *self as u8, self.description())
    }
}
