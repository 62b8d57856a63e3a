pub mod film_catalog;
