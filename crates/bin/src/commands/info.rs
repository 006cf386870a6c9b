//! Instance info command - shows backend, data location and record counts.

use paperboard::Instance;

use crate::backend::{backend_label, create_backend};
use crate::cli::InfoArgs;
use crate::output::OutputFormat;

/// Run the info command
pub async fn run(args: &InfoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let backend = create_backend(&args.backend_config).await?;
    let instance = Instance::open(backend);

    let stats = instance.stats().await?;
    let backend_str = backend_label(&args.backend_config);
    let data_dir = args.backend_config.data_dir();

    match args.format {
        OutputFormat::Human => {
            println!("Backend:     {backend_str}");
            println!("Data dir:    {}", data_dir.display());
            println!("Users:       {}", stats.users);
            println!("Papers:      {}", stats.papers);
            println!("Reviews:     {}", stats.posts);
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "backend": backend_str,
                "data_dir": data_dir,
                "users": stats.users,
                "papers": stats.papers,
                "posts": stats.posts,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}
