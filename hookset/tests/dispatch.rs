//! Dispatching the help and page attachments hooks.

use hookset::{
    AttachmentsContext, Dispatcher, Help, HelpRequest, Module, PageAttachments, RegistryBuilder,
    modules::{
        ClassHooks, LegacyHooks,
        class_hooks::{CUSTOM_STYLES, HELP_ROUTE, HELP_TEXT, PAGE_ROUTE},
    },
    testing::RecordingHook,
};

mod common;
use common::demo_registry;

#[test]
fn test_help_for_module_page() {
    let registry = demo_registry();
    let help = Dispatcher::new(&registry).first::<Help>(&mut HelpRequest::new(HELP_ROUTE));
    assert_eq!(help, HELP_TEXT);
    assert!(!help.is_empty());
}

#[test]
fn test_help_for_other_routes_is_empty() {
    let registry = demo_registry();
    let dispatcher = Dispatcher::new(&registry);

    for route in ["anything_else", "help.page.legacy_hooks", PAGE_ROUTE] {
        assert_eq!(dispatcher.first::<Help>(&mut HelpRequest::new(route)), "");
    }
}

#[test]
fn test_attachments_on_class_page() {
    let registry = demo_registry();
    let mut ctx = AttachmentsContext::new(PAGE_ROUTE);
    Dispatcher::new(&registry).alter::<PageAttachments>(&mut ctx);

    let styles = ctx
        .attachments
        .libraries()
        .iter()
        .filter(|library| *library == CUSTOM_STYLES)
        .count();
    assert_eq!(styles, 1);
}

#[test]
fn test_attachments_elsewhere_unchanged() {
    let registry = demo_registry();
    let dispatcher = Dispatcher::new(&registry);

    for route in ["legacy_hooks.page", "help.page", "class_hooks.page.extra"] {
        let mut ctx = AttachmentsContext::new(route);
        ctx.attachments.attach_library("core/drupal");
        let before = ctx.clone();

        dispatcher.alter::<PageAttachments>(&mut ctx);
        assert_eq!(ctx, before);
    }
}

#[test]
fn test_attachments_keep_existing_libraries_first() {
    let registry = demo_registry();
    let mut ctx = AttachmentsContext::new(PAGE_ROUTE);
    ctx.attachments.attach_library("core/drupal");

    Dispatcher::new(&registry).alter::<PageAttachments>(&mut ctx);
    assert_eq!(ctx.attachments.libraries(), ["core/drupal", CUSTOM_STYLES]);
}

#[test]
fn test_later_handlers_see_earlier_mutations() {
    let recorder = RecordingHook::<PageAttachments>::default();

    let mut builder = RegistryBuilder::new();
    ClassHooks
        .register(&mut builder.module(ClassHooks.name()))
        .unwrap();
    builder
        .module("observer")
        .implement::<PageAttachments, _>(recorder.clone())
        .unwrap();
    LegacyHooks
        .register(&mut builder.module(LegacyHooks.name()))
        .unwrap();
    let registry = builder.build();

    let mut ctx = AttachmentsContext::new(PAGE_ROUTE);
    let invoked = Dispatcher::new(&registry).alter::<PageAttachments>(&mut ctx);
    assert_eq!(invoked, 2);

    let seen = recorder.contexts();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].attachments.contains(CUSTOM_STYLES));
}

#[test]
fn test_dispatch_without_registrations() {
    let registry = RegistryBuilder::new().build();
    let dispatcher = Dispatcher::new(&registry);

    assert_eq!(dispatcher.first::<Help>(&mut HelpRequest::new(HELP_ROUTE)), "");

    let mut ctx = AttachmentsContext::new(PAGE_ROUTE);
    assert_eq!(dispatcher.alter::<PageAttachments>(&mut ctx), 0);
    assert!(ctx.attachments.is_empty());
}
