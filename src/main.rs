use std::env;
use std::io::{self, Write};

use chrono::NaiveDate;
use env_logger::Env;

use cyfair_booking::models::customer::ContactInfo;
use cyfair_booking::models::house::{Frequency, HouseSizeBand};
use cyfair_booking::services::backend::{BackendClient, BookingBackend};
use cyfair_booking::wizard::{BookingStep, BookingWizard, PromoError, SubmitError};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000/api";

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let backend_url = env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
    let auth_token = env::var("AUTH_TOKEN").ok();
    let is_guest = auth_token.is_none();

    println!("Maids of Cyfair booking");
    println!("Backend: {}", backend_url);
    if is_guest {
        println!("Booking as guest (set AUTH_TOKEN to book on an account)");
    }

    let mut client = BackendClient::new(&backend_url).expect("BACKEND_URL must be a valid URL");
    if let Some(token) = auth_token {
        client = client.with_auth_token(token);
    }

    let mut wizard = BookingWizard::new(client, is_guest);
    for warning in wizard.load_initial_data().await {
        println!("! {}", warning);
    }

    run_wizard(&mut wizard).await;
}

enum Nav {
    Forward,
    Back,
    Stay,
    Quit,
    Done,
}

async fn run_wizard<B: BookingBackend>(wizard: &mut BookingWizard<B>) {
    loop {
        let step = wizard.current_step();
        println!();
        println!(
            "=== Step {}/{}: {} ===",
            step.display_number(),
            BookingStep::ORDER.len(),
            step.title()
        );

        let nav = match step {
            BookingStep::ServiceAndSize => step_service_and_size(wizard).await,
            BookingStep::Rooms => step_rooms(wizard),
            BookingStep::AddOns => step_add_ons(wizard),
            BookingStep::Date => step_date(wizard).await,
            BookingStep::Time => step_time(wizard),
            BookingStep::Contact => step_contact(wizard).await,
            BookingStep::Review => step_review(wizard).await,
        };

        match nav {
            Nav::Forward => {
                if !wizard.next() {
                    println!("Please complete this step before continuing.");
                }
            }
            Nav::Back => {
                wizard.previous();
            }
            Nav::Stay => {}
            Nav::Quit => {
                println!("Booking cancelled.");
                return;
            }
            Nav::Done => return,
        }
    }
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    io::stdout().flush().ok();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// Parse a 1-based menu choice.
fn choose(input: &str, len: usize) -> Option<usize> {
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n - 1),
        _ => None,
    }
}

fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%a, %b %e %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

async fn step_service_and_size<B: BookingBackend>(wizard: &mut BookingWizard<B>) -> Nav {
    println!("House size (square footage):");
    for (i, band) in HouseSizeBand::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, band.label());
    }
    let input = prompt("Select house size [number, b=back, q=quit]: ");
    match input.as_str() {
        "q" => return Nav::Quit,
        "b" => return Nav::Back,
        other => {
            if let Some(i) = choose(other, HouseSizeBand::ALL.len()) {
                wizard.set_house_size(HouseSizeBand::ALL[i]).await;
            } else if wizard.draft().house_size().is_none() {
                return Nav::Stay;
            }
        }
    }

    println!("Service frequency:");
    for (i, frequency) in Frequency::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, frequency.label());
    }
    let input = prompt("Select frequency [number]: ");
    if let Some(i) = choose(&input, Frequency::ALL.len()) {
        wizard.set_frequency(Frequency::ALL[i]).await;
    } else if wizard.draft().frequency().is_none() {
        return Nav::Stay;
    }

    if wizard.draft().base_price() > 0.0 {
        println!(
            "Base price: ${:.2} (minimum charge is $125)",
            wizard.draft().base_price()
        );
    }

    let standard: Vec<_> = wizard.standard_services().cloned().collect();
    if !standard.is_empty() {
        loop {
            println!("Cleaning services (toggle by number, blank to continue):");
            for (i, service) in standard.iter().enumerate() {
                let marker = if wizard.draft().is_standard_selected(&service.id) {
                    "x"
                } else {
                    " "
                };
                println!(
                    "  {}. [{}] {}: {}",
                    i + 1,
                    marker,
                    service.name,
                    service.description
                );
            }
            let input = prompt("> ");
            if input.is_empty() {
                break;
            }
            if let Some(i) = choose(&input, standard.len()) {
                if wizard.toggle_standard_service(&standard[i]) {
                    println!("{} added", standard[i].name);
                }
            }
        }
    }

    Nav::Forward
}

fn step_rooms<B: BookingBackend>(wizard: &mut BookingWizard<B>) -> Nav {
    println!("Rooms and areas to clean (optional, toggle by number, blank to continue):");
    loop {
        let rooms = wizard.draft().rooms().clone();
        let flags = [
            ("Master bedroom", rooms.master_bedroom),
            ("Master bathroom", rooms.master_bathroom),
            ("Dining room", rooms.dining_room),
            ("Kitchen", rooms.kitchen),
            ("Living room", rooms.living_room),
            ("Media room", rooms.media_room),
            ("Game room", rooms.game_room),
            ("Office", rooms.office),
        ];
        for (i, (label, on)) in flags.iter().enumerate() {
            println!("  {}. [{}] {}", i + 1, if *on { "x" } else { " " }, label);
        }
        let input = prompt("> ");
        match input.as_str() {
            "" => break,
            "b" => return Nav::Back,
            "q" => return Nav::Quit,
            other => {
                if let Some(i) = choose(other, flags.len()) {
                    let rooms = wizard.rooms_mut();
                    match i {
                        0 => rooms.master_bedroom = !rooms.master_bedroom,
                        1 => rooms.master_bathroom = !rooms.master_bathroom,
                        2 => rooms.dining_room = !rooms.dining_room,
                        3 => rooms.kitchen = !rooms.kitchen,
                        4 => rooms.living_room = !rooms.living_room,
                        5 => rooms.media_room = !rooms.media_room,
                        6 => rooms.game_room = !rooms.game_room,
                        _ => rooms.office = !rooms.office,
                    }
                }
            }
        }
    }

    let counts = [
        "Other bedrooms (0-6): ",
        "Other full bathrooms (0-6): ",
        "Half bathrooms (0-6): ",
    ];
    for (i, label) in counts.iter().enumerate() {
        let input = prompt(label);
        if let Ok(count) = input.parse::<u8>() {
            let rooms = wizard.rooms_mut();
            match i {
                0 => rooms.set_other_bedrooms(count),
                1 => rooms.set_other_full_bathrooms(count),
                _ => rooms.set_half_bathrooms(count),
            }
        }
    }

    Nav::Forward
}

fn step_add_ons<B: BookingBackend>(wizard: &mut BookingWizard<B>) -> Nav {
    let add_ons: Vec<_> = wizard.a_la_carte_services().cloned().collect();
    if add_ons.is_empty() {
        println!("No add-on services available.");
        return Nav::Forward;
    }

    loop {
        println!("Add-on services (number adds one, e=edit cart, blank to continue):");
        for (i, service) in add_ons.iter().enumerate() {
            println!(
                "  {}. {} (${:.2})",
                i + 1,
                service.name,
                service.unit_price()
            );
        }
        if !wizard.draft().cart().is_empty() {
            println!("Cart:");
            for item in wizard.draft().cart() {
                println!(
                    "  {} x{} (${:.2} each)",
                    item.name, item.quantity, item.unit_price
                );
            }
            println!("Add-on total: ${:.2}", wizard.quote().add_on_total);
        }

        let input = prompt("> ");
        match input.as_str() {
            "" => break,
            "b" => return Nav::Back,
            "q" => return Nav::Quit,
            "e" => {
                let cart: Vec<_> = wizard.draft().cart().to_vec();
                for item in &cart {
                    let answer = prompt(&format!(
                        "Quantity for {} (now {}, 0 removes): ",
                        item.name, item.quantity
                    ));
                    if let Ok(quantity) = answer.parse::<u32>() {
                        wizard.set_cart_quantity(&item.service_id, quantity);
                    }
                }
            }
            other => {
                if let Some(i) = choose(other, add_ons.len()) {
                    wizard.add_a_la_carte(&add_ons[i]);
                    println!("{} added to cart", add_ons[i].name);
                }
            }
        }
    }

    Nav::Forward
}

async fn step_date<B: BookingBackend>(wizard: &mut BookingWizard<B>) -> Nav {
    let dates: Vec<_> = wizard.available_dates().to_vec();
    if dates.is_empty() {
        println!("No available dates right now. Please try again later.");
        return Nav::Back;
    }

    println!("Available dates:");
    for (i, date) in dates.iter().enumerate() {
        println!("  {}. {}", i + 1, format_date(date));
    }
    let input = prompt("Select a date [number, b=back, q=quit]: ");
    match input.as_str() {
        "b" => Nav::Back,
        "q" => Nav::Quit,
        other => match choose(other, dates.len()) {
            Some(i) => {
                if wizard.select_date(&dates[i]).await.is_err() {
                    println!("Failed to load time slots for that date.");
                }
                Nav::Forward
            }
            None => Nav::Stay,
        },
    }
}

fn step_time<B: BookingBackend>(wizard: &mut BookingWizard<B>) -> Nav {
    let slots: Vec<_> = wizard.time_slots().to_vec();
    if slots.is_empty() {
        println!("No time slots for the selected date. Pick another date.");
        return Nav::Back;
    }

    println!(
        "Time slots for {}:",
        wizard
            .draft()
            .selected_date()
            .map(format_date)
            .unwrap_or_default()
    );
    for (i, slot) in slots.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, slot.start_time, slot.end_time);
    }
    let input = prompt("Select a time slot [number, b=back, q=quit]: ");
    match input.as_str() {
        "b" => Nav::Back,
        "q" => Nav::Quit,
        other => match choose(other, slots.len()) {
            Some(i) => {
                wizard.select_time_slot(slots[i].clone());
                Nav::Forward
            }
            None => Nav::Stay,
        },
    }
}

async fn step_contact<B: BookingBackend>(wizard: &mut BookingWizard<B>) -> Nav {
    println!("Contact information (* required):");
    let contact = ContactInfo {
        email: prompt("Email*: "),
        first_name: prompt("First name*: "),
        last_name: prompt("Last name*: "),
        phone: prompt("Phone: "),
        address: prompt("Address: "),
        city: prompt("City: "),
        state: prompt("State: "),
        zip_code: prompt("ZIP code: "),
    };
    let complete = contact.has_required_fields();
    wizard.set_contact(contact);
    if !complete {
        println!("Email, first name and last name are required (email must be valid).");
        return Nav::Stay;
    }

    let instructions = prompt("Special instructions (blank for none): ");
    wizard.set_special_instructions(instructions);

    let code = prompt("Promo code (blank to skip): ");
    if !code.is_empty() {
        match wizard.apply_promo(&code).await {
            Ok(applied) => println!(
                "Promo {} applied: -${:.2}",
                applied.promo.code, applied.discount
            ),
            Err(PromoError::Rejected(message)) => println!("Promo not applied: {}", message),
            Err(PromoError::Backend(err)) => println!("Could not validate promo: {}", err),
        }
    }

    Nav::Forward
}

async fn step_review<B: BookingBackend>(wizard: &mut BookingWizard<B>) -> Nav {
    let draft = wizard.draft();
    println!("Booking summary:");
    if let Some(band) = draft.house_size() {
        println!("  House size: {}", band.label());
    }
    if let Some(frequency) = draft.frequency() {
        println!("  Frequency: {}", frequency.label());
    }
    if let Some(date) = draft.selected_date() {
        println!("  Date: {}", format_date(date));
    }
    if let Some(slot) = draft.selected_slot() {
        println!("  Time: {} - {}", slot.start_time, slot.end_time);
    }
    println!(
        "  Name: {} {}",
        draft.contact().first_name,
        draft.contact().last_name
    );
    println!("  Email: {}", draft.contact().email);

    let quote = wizard.quote();
    println!("  Base service: ${:.2}", quote.base_price);
    if quote.add_on_total > 0.0 {
        println!("  Add-ons: ${:.2}", quote.add_on_total);
    }
    if quote.discount > 0.0 {
        println!("  Discount: -${:.2}", quote.discount);
    }
    println!("  Total: ${:.2}", quote.total);
    println!("Payment is simulated; no card will be charged.");

    let input = prompt("Complete booking? [c=confirm, b=back, q=quit]: ");
    match input.as_str() {
        "b" => return Nav::Back,
        "q" => return Nav::Quit,
        "c" => {}
        _ => return Nav::Stay,
    }

    match wizard.submit().await {
        Ok(outcome) => {
            println!("Booking confirmed: {}", outcome.booking.id);
            match outcome.payment {
                Ok(payment) if payment.success => {
                    println!("Payment of ${:.2} processed.", outcome.amount_charged);
                    if let Some(transaction_id) = payment.transaction_id {
                        println!("Transaction: {}", transaction_id);
                    }
                }
                Ok(_) => {
                    println!("Payment failed. Your booking was created; please retry payment.");
                }
                Err(err) => {
                    println!("Payment could not be processed: {}", err);
                    println!("Your booking was created; please retry payment.");
                }
            }
            if let Ok(confirmation) = wizard.fetch_confirmation(&outcome.booking.id).await {
                println!(
                    "Scheduled {} at {} (status: {:?})",
                    format_date(&confirmation.booking_date),
                    confirmation.time_slot,
                    confirmation.status
                );
            }
            Nav::Done
        }
        Err(SubmitError::Backend(err)) => {
            println!(
                "Booking failed: {}. Your selections are saved; try again.",
                err
            );
            Nav::Stay
        }
        Err(err) => {
            println!("{}", err);
            Nav::Stay
        }
    }
}
