//! Signup Form Example
//!
//! Walks a signup form through the three submission outcomes:
//! - an empty submit renders messages into the error box
//! - a filled honeypot is dropped without feedback
//! - a complete form clears the messages and runs the callback

use formguard::prelude::*;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

fn page() -> Element {
    Element::new("body")
        .child(Element::div().id("signup-errors"))
        .child(
            Element::form()
                .id("signup")
                .data("form-callback", "createAccount")
                .data("error-output-id", "signup-errors")
                .child(Element::input("text").id("first").name("first-name").required())
                .child(
                    Element::input("email")
                        .id("email")
                        .name("email_address")
                        .required()
                        .data("error-message", "Enter the address we should write to"),
                )
                .child(
                    Element::input("password")
                        .id("password")
                        .name("password")
                        .required()
                        .attr("minlength", "8"),
                )
                .child(
                    Element::div()
                        .class("jar")
                        .child(Element::input("text").id("website").name("website")),
                )
                .child(Element::button("Create account")),
        )
        .child(
            Element::form()
                .id("search")
                .novalidate()
                .child(Element::input("search").name("q")),
        )
}

fn print_outcome(validation: &FormValidation<Document>, outcome: &SubmitOutcome<NodeId>) {
    match outcome {
        SubmitOutcome::Invalid(messages) => {
            println!("invalid:");
            let doc = validation.document();
            for message in messages {
                println!("  {}", doc.text_content(message.node));
            }
        }
        other => println!("{other:?}"),
    }
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("Failed to initialize logger");

    let mut validation = FormValidation::new(Document::new(page()));
    validation.register_callback("createAccount", |event, doc: &mut Document| {
        let email = doc
            .get_element_by_id("email")
            .map(|field| doc.value(field))
            .unwrap_or_default();
        println!("account created from form '{}' for {email}", event.form_id());
    });
    validation.init();

    let doc = validation.document();
    let form = doc.get_element_by_id("signup").expect("signup form");
    let first = doc.get_element_by_id("first").expect("first name field");
    let email = doc.get_element_by_id("email").expect("email field");
    let password = doc.get_element_by_id("password").expect("password field");
    let website = doc.get_element_by_id("website").expect("honeypot field");

    let outcome = validation.submit(form);
    print_outcome(&validation, &outcome);

    {
        let doc = validation.document_mut();
        doc.set_value(first, "Ada").expect("set first name");
        doc.set_value(email, "ada@example.com").expect("set email");
        doc.set_value(password, "hunter2").expect("set password");
    }
    let outcome = validation.submit(form);
    print_outcome(&validation, &outcome);

    validation.document_mut().set_value(website, "http://spam.example").expect("fill honeypot");
    let outcome = validation.submit(form);
    print_outcome(&validation, &outcome);

    {
        let doc = validation.document_mut();
        doc.set_value(website, "").expect("empty honeypot");
        doc.set_value(password, "correct horse battery").expect("set password");
    }
    let outcome = validation.submit(form);
    print_outcome(&validation, &outcome);
}
