//! Walk through the guest list queries.
//!
//! Run with `RUST_LOG=debug cargo run --example guest_list` to see each
//! dataset operation logged.

use anyhow::Result;
use lambda_linq::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
struct Guest {
    name: String,
    age: i32,
}

impl Guest {
    fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

fn print_guests(title: &str, guests: &[Guest]) {
    println!("{}:", title);
    for guest in guests {
        println!("  {:<6} {}", guest.name, guest.age);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let guests = Rc::new(RefCell::new(vec![
        Guest::new("John", 32),
        Guest::new("Mike", 28),
        Guest::new("Eliz", 27),
    ]));

    let older = from(&guests).filter(|g: &Guest| g.age > 30)?;
    println!("guests over 30: {}", older.count()?);

    let ages = from(&guests).select(|g: &Guest| g.age)?;
    println!("ages: {:?}", ages.to_vec()?);

    guests.borrow_mut().push(Guest::new("Joe", 18));

    let older_view = from(&guests).filter(|g: &Guest| g.age > 30)?;
    let joe_view = from(&guests).filter(|g: &Guest| g.name == "Joe")?;
    let merged = insert(older_view).into(joe_view.clone(), MutationMode::default())?;
    print_guests("over 30 merged into Joe", &merged.to_vec()?);
    println!("Joe view still holds {} guest(s)", joe_view.count()?);

    from(&guests).order_by(|g: &Guest| g.age, SortOrder::Descending)?;
    print_guests("by age, oldest first", &guests.borrow());

    Ok(())
}
