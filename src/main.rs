use miette::Result;

/// Main entry point for the graph-weights CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    // Run the library's main function
    graph_weights::run()
}
