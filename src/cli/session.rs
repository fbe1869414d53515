//! Interactive menu session: one graph, one input, one output.

use std::io::{BufRead, Write};

use crate::graph::{build_graph, Graph};
use crate::types::{Backend, GraphError, GraphResult, VertexId, Weight, NO_LABEL};

use super::menu::{MenuCommand, COMMANDS};
use super::prompter::Prompter;

/// How the render command prints the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Session-wide settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Suppress banners, menus and prompts; results are still printed.
    pub quiet: bool,
    pub format: OutputFormat,
}

/// The context of one menu run: the graph plus the I/O it is driven through.
pub struct Session<R, W> {
    graph: Box<dyn Graph>,
    input: Prompter<R>,
    out: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Wrap an already constructed graph.
    pub fn new(graph: Box<dyn Graph>, input: R, out: W, options: SessionOptions) -> Self {
        Self {
            graph,
            input: Prompter::new(input),
            out,
            options,
        }
    }

    /// Build the session's graph, prompting for whatever was not supplied.
    ///
    /// An unknown backend selection is returned as [`GraphError::InvalidBackend`].
    pub fn start(
        input: R,
        mut out: W,
        options: SessionOptions,
        backend: Option<Backend>,
        vertices: Option<usize>,
    ) -> GraphResult<Self> {
        let mut input = Prompter::new(input);
        if !options.quiet {
            writeln!(out, "Welcome to the graph library!")?;
        }

        let backend = match backend {
            Some(b) => b,
            None => {
                if !options.quiet {
                    writeln!(out, "Choose the graph representation:")?;
                    writeln!(out, "1 - Adjacency matrix")?;
                    writeln!(out, "2 - Adjacency list")?;
                }
                let choice = input.next_token()?;
                Backend::from_name(&choice).ok_or(GraphError::InvalidBackend(choice))?
            }
        };

        let vertices = match vertices {
            Some(n) => n,
            None => {
                if !options.quiet {
                    writeln!(out, "Enter the number of vertices:")?;
                }
                input.next_int::<usize>()?
            }
        };

        let graph = build_graph(backend, vertices)?;
        Ok(Self {
            graph,
            input,
            out,
            options,
        })
    }

    /// The graph being edited.
    pub fn graph(&self) -> &dyn Graph {
        self.graph.as_ref()
    }

    /// Consume the session, returning the graph and the output sink.
    pub fn into_parts(self) -> (Box<dyn Graph>, W) {
        (self.graph, self.out)
    }

    /// Run the menu loop until exit or end of input.
    pub fn run(&mut self) -> GraphResult<()> {
        loop {
            self.print_menu()?;
            let number = match self.input.next_int::<i64>() {
                Ok(n) => n,
                Err(GraphError::UnexpectedEof) => return Ok(()),
                Err(e @ GraphError::InvalidInteger(_)) => {
                    self.report(&e)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let Some(command) = MenuCommand::from_number(number) else {
                self.report(&GraphError::UnknownCommand(number))?;
                continue;
            };
            if command == MenuCommand::Exit {
                writeln!(self.out, "Exiting...")?;
                return Ok(());
            }

            match self.execute(command) {
                Ok(()) => {}
                Err(GraphError::UnexpectedEof) => return Ok(()),
                Err(e @ GraphError::InvalidInteger(_)) => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> GraphResult<()> {
        if self.options.quiet {
            return Ok(());
        }
        writeln!(self.out, "\nOperations menu:")?;
        for command in COMMANDS {
            writeln!(self.out, "{}", command)?;
        }
        write!(self.out, "Choose an option: ")?;
        self.out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> GraphResult<()> {
        if !self.options.quiet {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    /// Print a recoverable input error and skip the offending line.
    fn report(&mut self, error: &GraphError) -> GraphResult<()> {
        log::debug!("menu input rejected: {}", error);
        self.input.discard_line();
        writeln!(self.out, "Error: {}", error)?;
        Ok(())
    }

    fn read_edge(&mut self, text: &str) -> GraphResult<(VertexId, VertexId)> {
        self.prompt(text)?;
        Ok((self.input.next_int()?, self.input.next_int()?))
    }

    fn read_vertex(&mut self, text: &str) -> GraphResult<VertexId> {
        self.prompt(text)?;
        self.input.next_int()
    }

    /// Run one non-exit command against the graph.
    pub fn execute(&mut self, command: MenuCommand) -> GraphResult<()> {
        match command {
            MenuCommand::Exit => {}
            MenuCommand::AddEdge => {
                let (o, d) = self.read_edge("Enter origin and destination vertices:")?;
                self.graph.add_edge(o, d);
            }
            MenuCommand::RemoveEdge => {
                let (o, d) = self.read_edge("Enter origin and destination vertices:")?;
                self.graph.remove_edge(o, d);
            }
            MenuCommand::AddWeightedEdge => {
                let (o, d) = self.read_edge("Enter origin, destination and weight:")?;
                let w: Weight = self.input.next_int()?;
                self.graph.add_weighted_edge(o, d, w);
            }
            MenuCommand::EdgeExists => {
                let (o, d) = self.read_edge("Enter origin and destination vertices:")?;
                let exists = self.graph.edge_exists(o, d);
                writeln!(self.out, "Edge exists? {}", exists)?;
            }
            MenuCommand::VerticesAdjacent => {
                let (a, b) = self.read_edge("Enter the two vertices:")?;
                let adjacent = self.graph.are_adjacent(a, b);
                writeln!(self.out, "Vertices are adjacent? {}", adjacent)?;
            }
            MenuCommand::EdgesAdjacent => {
                let (o1, d1) = self.read_edge("Enter the first edge (origin and destination):")?;
                let (o2, d2) = self.read_edge("Enter the second edge (origin and destination):")?;
                let adjacent = self.graph.edges_are_adjacent(o1, d1, o2, d2);
                writeln!(self.out, "Edges are adjacent? {}", adjacent)?;
            }
            MenuCommand::EdgeIncidence => {
                let (o, d) = self.read_edge("Enter the edge (origin and destination):")?;
                let v = self.read_vertex("Enter the vertex:")?;
                let incides = self.graph.edge_incides_on_vertex(o, d, v);
                writeln!(self.out, "Edge incides on vertex? {}", incides)?;
            }
            MenuCommand::SetVertexLabel => {
                let v = self.read_vertex("Enter the vertex and the label:")?;
                let label = self.input.rest_of_line()?;
                self.graph.set_vertex_label(v, &label);
            }
            MenuCommand::GetVertexLabel => {
                let v = self.read_vertex("Enter the vertex:")?;
                let label = self.graph.vertex_label(v).unwrap_or(NO_LABEL);
                writeln!(self.out, "Label: {}", label)?;
            }
            MenuCommand::SetVertexWeight => {
                let v = self.read_vertex("Enter the vertex and the weight:")?;
                let w: Weight = self.input.next_int()?;
                self.graph.set_vertex_weight(v, w);
            }
            MenuCommand::GetVertexWeight => {
                let v = self.read_vertex("Enter the vertex:")?;
                writeln!(self.out, "Weight: {}", self.graph.vertex_weight(v))?;
            }
            MenuCommand::SetEdgeLabel => {
                let (o, d) =
                    self.read_edge("Enter the edge (origin and destination) and the label:")?;
                let label = self.input.rest_of_line()?;
                self.graph.set_edge_label(o, d, &label);
            }
            MenuCommand::GetEdgeLabel => {
                let (o, d) = self.read_edge("Enter the edge (origin and destination):")?;
                let label = self.graph.edge_label(o, d).unwrap_or(NO_LABEL);
                writeln!(self.out, "Label: {}", label)?;
            }
            MenuCommand::SetEdgeWeight => {
                let (o, d) =
                    self.read_edge("Enter the edge (origin and destination) and the weight:")?;
                let w: Weight = self.input.next_int()?;
                self.graph.set_edge_weight(o, d, w);
            }
            MenuCommand::GetEdgeWeight => {
                let (o, d) = self.read_edge("Enter the edge (origin and destination):")?;
                writeln!(self.out, "Weight: {}", self.graph.edge_weight(o, d))?;
            }
            MenuCommand::IsEmpty => {
                writeln!(self.out, "Graph is empty? {}", self.graph.is_empty())?;
            }
            MenuCommand::IsComplete => {
                writeln!(self.out, "Graph is complete? {}", self.graph.is_complete())?;
            }
            MenuCommand::VertexCount => {
                writeln!(self.out, "Number of vertices: {}", self.graph.vertex_count())?;
            }
            MenuCommand::EdgeCount => {
                writeln!(self.out, "Number of edges: {}", self.graph.edge_count())?;
            }
            MenuCommand::Render => match self.options.format {
                OutputFormat::Text => write!(self.out, "{}", self.graph.render())?,
                OutputFormat::Json => {
                    writeln!(self.out, "{}", self.graph.snapshot().to_json()?)?;
                }
            },
        }
        Ok(())
    }
}
