mod customer_id_test;
mod derived_test;
mod postal_code_test;
mod validate_test;
