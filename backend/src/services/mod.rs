pub mod tax_rules;
