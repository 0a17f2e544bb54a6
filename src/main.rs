use facloc::{init_tracing, input_path_from_args, run, CliConfig, SolverFactory, USAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let Some(input_path) = input_path_from_args(std::env::args().skip(1)) else {
        println!("{}", USAGE);
        return Ok(());
    };

    // Create backend and solve exactly
    let backend = SolverFactory::default_solver()?;
    let config = CliConfig::exact(input_path, backend);
    println!("{}", run(&config)?);

    Ok(())
}
