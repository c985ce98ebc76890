use buttonfly::config;
use buttonfly::geom::Viewport;
use buttonfly::layout;
use buttonfly::widget::{ButtonFly, ButtonRef};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "buttonfly", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the layout table: row, slot, delay units and variant per button.
    Layout {
        /// Number of child buttons.
        #[arg(short = 'n', long, default_value_t = 16)]
        count: usize,
    },
    /// Render the row tree top to bottom, with margins.
    Rows {
        /// Number of child buttons.
        #[arg(short = 'n', long, default_value_t = 16)]
        count: usize,
    },
    /// Print the per-button stagger delays in milliseconds.
    Timings {
        /// Number of child buttons.
        #[arg(short = 'n', long, default_value_t = 16)]
        count: usize,
        /// Use the hide transition instead of show.
        #[arg(long)]
        hide: bool,
    },
    /// Write the default config file if none exists.
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout { count } => print_layout(count),
        Commands::Rows { count } => print_rows(count),
        Commands::Timings { count, hide } => print_timings(count, hide),
        Commands::InitConfig => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn print_layout(count: usize) {
    let options = config::load_or_default();

    println!("{:>5} {:>4} {:>4} {:>6} {:>8}", "index", "row", "pos", "delay", "variant");
    for index in 0..count {
        let position = layout::resolve_position(index);
        println!(
            "{:>5} {:>4} {:>4} {:>6} {:>8}",
            index,
            position.row,
            position.pos,
            layout::delay_units_for_button(index),
            layout::variant_for_button(index, options.variant_count),
        );
    }
}

fn print_rows(count: usize) {
    let widget = build_widget(count);

    for row in widget.rows().iter_top_down() {
        let margin = widget.row_margin(row.number());
        let slots: Vec<String> = row
            .children()
            .iter()
            .map(|child| match child {
                ButtonRef::Main => "[main]".to_string(),
                ButtonRef::Child(index) => widget.children()[*index].label().to_string(),
            })
            .collect();

        println!("row {:>3}  margin {:>6.1}px  {}", row.number(), margin, slots.join("  "));
    }
}

fn print_timings(count: usize, hide: bool) {
    let mut widget = build_widget(count);
    let schedule = if hide { widget.hide() } else { widget.show() };

    for entry in schedule {
        println!(
            "{}  {:>6}ms",
            widget.children()[entry.index].label(),
            entry.delay.as_millis()
        );
    }
}

fn build_widget(count: usize) -> ButtonFly {
    let options = config::load_or_default();
    let labels = (0..count).map(|i| format!("b{i:02}")).collect();
    ButtonFly::new(labels, Viewport::new(1920.0, 1080.0), options)
}
