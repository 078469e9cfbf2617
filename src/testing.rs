//! Fixtures shared by unit tests.

use std::io::Write;

use rten::model_builder::{ModelBuilder, ModelFormat, OpType};
use rten::DataType;
use tempfile::NamedTempFile;

/// Serialized `.rten` graph: `input` -> Relu -> `output`.
pub fn relu_model() -> Vec<u8> {
    let mut builder = ModelBuilder::new(ModelFormat::V2);
    let mut graph_builder = builder.graph_builder();

    let input = graph_builder.add_value("input", None, Some(DataType::Float));
    let output = graph_builder.add_value("output", None, Some(DataType::Float));
    graph_builder.add_input(input);
    graph_builder.add_output(output);
    graph_builder.add_operator("relu", OpType::Relu, &[Some(input)], &[output]);

    let graph = graph_builder.finish();
    builder.set_graph(graph);
    builder.finish()
}

/// Write `bytes` to a temp file that lives as long as the returned handle.
pub fn model_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
