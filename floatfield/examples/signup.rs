//! Signup Example
//!
//! Drives an email / password / confirm-password form the way a UI would:
//! typing, leaving fields, and pressing a submit button that validates
//! the whole form. Each step prints the field states and captions.
//!
//! Run with `cargo run --example signup`; validator and form logs go to
//! stderr at debug level.

use std::time::Duration;

use floatfield::prelude::*;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

// ============================================================================
// Signup Form
// ============================================================================

struct Signup {
    form: Form,
    email: Field,
    password: Field,
    confirm: Field,
    password_text: State<String>,
}

impl Signup {
    fn new() -> Self {
        let form = Form::with_config(FormConfig::new("signup"));

        let password_text = State::new(String::new());

        let mut email = Field::new("Email", State::default(), State::default())
            .description("We never share your email");
        let mut password =
            Field::new("Password", password_text.clone(), State::default()).secure();
        let mut confirm = Field::new("Confirm Password", State::default(), State::default()).secure();

        for field in [&mut email, &mut password, &mut confirm] {
            field.attach(&form);
        }

        email.add_validators([
            Validator::non_empty("Field is empty"),
            Validator::email("Email is not valid"),
        ]);
        password.add_validators([
            Validator::non_empty("Password is empty"),
            Validator::password(
                "Password must have 8 to 16 characters. At least one letter, one number and one special character.",
            ),
        ]);

        let mut signup = Self {
            form,
            email,
            password,
            confirm,
            password_text,
        };
        signup.rebuild_confirm();
        signup
    }

    /// The confirm validator captures the password, so it is rebuilt
    /// whenever the password changes.
    fn rebuild_confirm(&mut self) {
        self.confirm.add_validators([
            Validator::non_empty("Password is empty"),
            Validator::confirm_match(self.password_text.get(), "Passwords are different"),
        ]);
    }

    fn type_into(field: &mut Field, text: &str) {
        field.set_focused(true);
        field.set_text(text);
        field.set_focused(false);
    }

    fn sync(&mut self) {
        for field in [&mut self.email, &mut self.password, &mut self.confirm] {
            field.sync();
        }
    }

    fn print(&self, step: &str) {
        println!("--- {step} (invoked: {})", self.form.is_invoked());
        for field in [&self.email, &self.password, &self.confirm] {
            let caption = field
                .caption()
                .map(|m| m.to_string())
                .unwrap_or_default();
            println!(
                "  {:<18} {:<9} {}",
                field.placeholder().display(),
                format!("{:?}", field.state()),
                caption
            );
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("Failed to initialize logger");

    let mut signup = Signup::new();
    signup.print("initial");

    println!("submit: {}", signup.form.trigger_validate_all());
    signup.sync();
    signup.print("submitted empty form");

    Signup::type_into(&mut signup.email, "jane@");
    signup.print("bad email");

    Signup::type_into(&mut signup.email, "jane.doe@example.com");
    Signup::type_into(&mut signup.password, "Abc12345!");
    signup.rebuild_confirm();
    Signup::type_into(&mut signup.confirm, "abc12345!");
    signup.print("confirm differs in case");

    Signup::type_into(&mut signup.confirm, "Abc12345!");
    println!("submit: {}", signup.form.trigger_validate_all());
    signup.sync();
    signup.print("submitted valid form");

    tokio::time::sleep(signup.form.config().reset_delay + Duration::from_millis(50)).await;
    signup.print("after reset delay");
}
