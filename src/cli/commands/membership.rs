use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::membership::MembershipTier;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, rupees, strike};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Membership { tier } = cmd {
        match tier {
            Some(code) => {
                let t = MembershipTier::from_code(code)
                    .ok_or_else(|| AppError::InvalidTier(code.clone()))?;
                print_details(t);
            }
            None => {
                header("Membership");
                for t in MembershipTier::all() {
                    print_card(t);
                }
            }
        }
    }

    Ok(())
}

fn print_card(t: MembershipTier) {
    println!("{}", bold(t.title()));
    println!("  {}", t.summary());
    println!(
        "  {}  {}",
        bold(&rupees(t.price())),
        strike(&rupees(t.original_price()))
    );
    println!();
}

fn print_details(t: MembershipTier) {
    header(t.title());
    for line in textwrap::wrap(t.details(), 70) {
        println!("{}", line);
    }
    println!();
    match t.gym_limit() {
        Some(n) => println!("Gyms: up to {}", n),
        None => println!("Gyms: unlimited"),
    }
    println!("Price: {}", bold(&rupees(t.price())));
    println!("Original Price: {}", strike(&rupees(t.original_price())));
}
