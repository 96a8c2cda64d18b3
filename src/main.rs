use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Parser, Subcommand};

use sitewright::locator::LocalLocator;
use sitewright::markdown::MarkdownDialect;
use sitewright::site::{Site, SiteNode, StructureError};
use sitewright::widget::{ImageWidget, NavbarItem, NavbarWidget};

#[derive(Parser)]
#[command(name = "sitewright")]
#[command(about = "Programmatic static site builder with pluggable dialects")]
#[command(long_about = "\
Programmatic static site builder with pluggable dialects

Sitewright is a library first: you describe a tree of pages in code, and a
dialect renders it to HTML. This binary exists to exercise the library end
to end — `demo` assembles a small three-page site (a root page with an
image and a navbar, plus two children) with the markdown dialect and writes
it out.")]
#[command(version)]
struct Cli {
    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the demo site with the markdown dialect
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo => {
            let mut site = build_demo_site()?;
            site.write_to_path(&cli.output)?;
            print_written_pages(&site, site.root(), &cli.output);
            println!("Site generated at {}", cli.output.display());
        }
    }

    Ok(())
}

/// A root page with an image and a navbar, plus two child pages.
fn build_demo_site() -> Result<Site, StructureError> {
    let mut site = Site::new("Site Title", Box::new(MarkdownDialect::new()));

    {
        let root = site.root_mut();
        let mut pb = root.builder();

        let image = ImageWidget::new("image alt text 1", Rc::new(LocalLocator::new("asset/image1.jpg")))
            .with_dimensions(100, 100);
        pb.add_content_image(image);

        let navbar = NavbarWidget::new(vec![
            NavbarItem::new("Child1", "child1"),
            NavbarItem::new("Child2", "child2"),
        ]);
        pb.add_horizontal_navbar(navbar);
    }

    for (id, title, asset) in [
        ("child1", "Child Page 1", "asset/image2.jpg"),
        ("child2", "Child Page 2", "asset/image3.jpg"),
    ] {
        let child = site.root_mut().add_child(id, title)?;
        let image = ImageWidget::new("image alt text", Rc::new(LocalLocator::new(asset)))
            .with_dimensions(100, 100);
        child.builder().add_content_image(image);
    }

    Ok(site)
}

fn print_written_pages(site: &Site, node: &SiteNode, output: &Path) {
    println!(
        "Generated {}",
        output.join(site.filename_for(node.page_id())).display()
    );
    for child in node.children() {
        print_written_pages(site, child, output);
    }
}
