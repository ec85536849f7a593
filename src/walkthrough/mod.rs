//! The narrated walkthrough.
//!
//! A single top-to-bottom tour of variable-binding basics: immutable and
//! mutable bindings, primitive and composite values, block scoping, a
//! priced-order computation, and account construction. Every narration
//! line goes to the caller-supplied sink, so the whole tour can be
//! captured and re-run deterministically.

use std::io::Write;

use anyhow::Result;

pub mod account;
pub mod pricing;

use crate::walkthrough::account::{create_user_account, UserProfile};
use crate::walkthrough::pricing::{price_order, TAX_RATE};

/// Run the full walkthrough, writing narration to `sink`.
///
/// Nothing persists across invocations; running twice on the same day
/// produces byte-identical output.
pub fn run_examples(sink: &mut dyn Write) -> Result<()> {
    writeln!(sink, "=== Variable Binding Examples ===")?;
    writeln!(sink)?;

    bindings(sink)?;
    data_types(sink)?;

    writeln!(sink, "4. Variable Scope Examples:")?;
    demonstrate_scope(sink)?;
    writeln!(sink)?;

    best_practices(sink)?;
    common_mistakes(sink)?;
    account_creation(sink)?;

    Ok(())
}

/// Sections 1 and 2: declaring bindings, then updating the mutable ones.
fn bindings(sink: &mut dyn Write) -> Result<()> {
    writeln!(sink, "1. Variable Declarations:")?;

    // Values that never change stay immutable
    let site_name = "Learning Rust";
    let max_login_attempts = 3;
    let welcome_message = "Welcome to our website!";

    writeln!(sink, "Site: {}", site_name)?;
    writeln!(sink, "Max login attempts: {}", max_login_attempts)?;
    writeln!(sink, "Message: {}", welcome_message)?;
    writeln!(sink)?;

    // Values reassigned below need `mut`
    let mut current_user = "guest";
    let mut login_attempts = 0;
    let mut is_logged_in = false;

    writeln!(sink, "Current user: {}", current_user)?;
    writeln!(sink, "Login attempts: {}", login_attempts)?;
    writeln!(sink, "Is logged in: {}", is_logged_in)?;
    writeln!(sink)?;

    writeln!(sink, "2. Updating mutable bindings:")?;
    current_user = "john_doe";
    login_attempts = 1;
    is_logged_in = true;

    writeln!(sink, "Updated user: {}", current_user)?;
    writeln!(sink, "Updated attempts: {}", login_attempts)?;
    writeln!(sink, "Updated login status: {}", is_logged_in)?;
    writeln!(sink)?;

    Ok(())
}

/// Section 3: one example of each primitive and composite shape.
fn data_types(sink: &mut dyn Write) -> Result<()> {
    writeln!(sink, "3. Different Data Types:")?;

    // Strings, built up by interpolation
    let first_name = "Sarah";
    let last_name = "Johnson";
    let full_name = format!("{} {}", first_name, last_name);

    // Numbers, including fractional and negative
    let age = 28;
    let account_balance = 1250.75;
    let temperature = -2;

    // Booleans
    let has_permission = true;

    // Sequences, fixed at construction and only read
    let hobbies = ["reading", "swimming", "coding"];
    let lucky_numbers = [7, 13, 21, 42];

    // A nested record
    let profile = UserProfile {
        username: "sarah_j".to_string(),
        email: "sarah@example.com".to_string(),
        age: 28,
        is_active: true,
    };

    writeln!(sink, "Name: {}", full_name)?;
    writeln!(sink, "Age: {}", age)?;
    writeln!(sink, "Balance: ${}", account_balance)?;
    writeln!(sink, "Temperature: {}°C", temperature)?;
    writeln!(sink, "Has permission: {}", has_permission)?;
    writeln!(sink, "Hobbies: {}", hobbies.join(", "))?;
    writeln!(sink, "Lucky numbers: {}", join_numbers(&lucky_numbers))?;
    writeln!(sink, "User profile: {}", profile)?;
    writeln!(sink)?;

    Ok(())
}

/// Section 4: how far a binding reaches.
///
/// The outer binding is visible for the whole body, including inside the
/// nested block. The two block bindings end at the closing brace.
fn demonstrate_scope(sink: &mut dyn Write) -> Result<()> {
    let function_binding = "visible throughout the function";

    writeln!(sink, "Function scope: {}", function_binding)?;

    {
        let block_binding = "only visible inside this block";
        let another_block_binding = "me too";

        writeln!(sink, "Block scope: {}", block_binding)?;
        writeln!(sink, "Block scope: {}", another_block_binding)?;
        writeln!(
            sink,
            "Accessing the outer binding from the block: {}",
            function_binding
        )?;
    }

    // `block_binding` and `another_block_binding` are out of scope here.
    // Reading either one would not compile:
    //
    //     writeln!(sink, "{}", block_binding)?; // error[E0425]: cannot find value `block_binding`

    writeln!(sink, "Back in function scope: {}", function_binding)?;

    Ok(())
}

/// Section 5: naming, initialization, and the priced-order computation.
fn best_practices(sink: &mut dyn Write) -> Result<()> {
    writeln!(sink, "5. Best Practices Examples:")?;

    // Descriptive names, initialized with meaningful values
    let user_email_address = "user@example.com";
    let total_order_amount = 149.99;
    let is_payment_processing = false;

    // The cart starts empty, so the shipping-and-tax branch inside
    // `price_order` is never taken on this path.
    let items_in_cart = 0;

    let priced = price_order(total_order_amount, items_in_cart);

    writeln!(sink, "Email: {}", user_email_address)?;
    writeln!(sink, "Order amount: ${}", total_order_amount)?;
    writeln!(sink, "Tax rate: {:.0}%", TAX_RATE * 100.0)?;
    writeln!(sink, "Shipping: ${}", priced.shipping_cost)?;
    writeln!(sink, "Final price: ${:.2}", priced.final_price)?;
    writeln!(sink, "Processing: {}", is_payment_processing)?;
    writeln!(sink)?;

    Ok(())
}

/// Section 6: mistakes the compiler rejects before anything runs.
fn common_mistakes(sink: &mut dyn Write) -> Result<()> {
    writeln!(
        sink,
        "6. Common Mistakes (rejected at compile time, shown here as comments):"
    )?;

    // Mistake 1: reassigning an immutable binding.
    //
    //     let pi = 3.14159;
    //     pi = 3.14; // error[E0384]: cannot assign twice to immutable variable `pi`
    //
    // Mistake 2: using a binding before declaring it.
    //
    //     println!("{}", undeclared); // error[E0425]: cannot find value `undeclared`
    //     let undeclared = "too late";
    //
    // Neither can be demonstrated at run time; both are compile errors.

    writeln!(sink, "All examples completed successfully!")?;

    Ok(())
}

/// Section 7: construct one account from literal example input.
fn account_creation(sink: &mut dyn Write) -> Result<()> {
    writeln!(sink)?;
    writeln!(sink, "7. User Account Creation Example:")?;

    match create_user_account("mike_wilson", "mike@example.com", 25) {
        Some(account) => writeln!(sink, "Account created successfully: {}", account)?,
        None => writeln!(sink, "Failed to create account - invalid data")?,
    }

    Ok(())
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[test]
fn test_join_numbers() {
    assert_eq!(join_numbers(&[]), "");
    assert_eq!(join_numbers(&[7]), "7");
    assert_eq!(join_numbers(&[7, 13, 21, 42]), "7, 13, 21, 42");
    assert_eq!(join_numbers(&[-2, 0]), "-2, 0");
}

#[test]
fn test_scope_demo_line_order() {
    let mut sink = Vec::new();
    demonstrate_scope(&mut sink).unwrap();

    let out = String::from_utf8(sink).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Function scope: visible throughout the function",
            "Block scope: only visible inside this block",
            "Block scope: me too",
            "Accessing the outer binding from the block: visible throughout the function",
            "Back in function scope: visible throughout the function",
        ]
    );
}

#[test]
fn test_run_examples_narration() {
    let mut sink = Vec::new();
    run_examples(&mut sink).unwrap();

    let out = String::from_utf8(sink).unwrap();

    assert!(out.starts_with("=== Variable Binding Examples ===\n"));
    assert!(out.contains("1. Variable Declarations:"));
    assert!(out.contains("Updated user: john_doe"));
    assert!(out.contains("Name: Sarah Johnson"));
    assert!(out.contains("Lucky numbers: 7, 13, 21, 42"));
    assert!(out.contains("Order amount: $149.99"));
    assert!(out.contains("Tax rate: 8%"));
    assert!(out.contains("Shipping: $0"));

    // The cart stays empty, so the final price is the order amount
    // unchanged, printed with two decimal digits
    assert!(out.contains("Final price: $149.99"));

    assert!(out.contains("All examples completed successfully!"));
    assert!(out.contains("Account created successfully: UserAccount {"));
    assert!(out.contains("    username: \"mike_wilson\","));
}

#[test]
fn test_run_examples_is_deterministic() {
    let mut first = Vec::new();
    run_examples(&mut first).unwrap();

    let mut second = Vec::new();
    run_examples(&mut second).unwrap();

    assert_eq!(first, second);
}
