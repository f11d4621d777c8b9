pub mod runtime_factory;
