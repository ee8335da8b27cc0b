// Crate entry point. Declares the module tree so the binary and the tests can reach it.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod identity {
        pub mod core {
            pub mod employee;
            pub mod session;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod session_store;
                pub mod user_directory;
            }
        }
        pub mod use_cases {
            pub mod login {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod register {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod logout {
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod restore_session {
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod search_employees {
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
        }
    }

    pub mod jobs {
        pub mod core {
            pub mod catalog;
            pub mod job;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod seed_catalog;
            }
        }
        pub mod use_cases {
            pub mod browse_jobs {
                pub mod inbound {
                    pub mod cli;
                }
            }
        }
    }

    pub mod time_entries {
        pub mod core {
            pub mod decision;
            pub mod events;
            pub mod evolve;
            pub mod state;
            pub mod time_entry;
        }
        pub mod application {
            pub mod errors;
            pub mod ledger_writer;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
                pub mod repository_key_value;
            }
        }
        pub mod use_cases {
            pub mod clock_in {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod clock_out {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod list_time_entries {
                pub mod handler;
                pub mod projection;
                pub mod queries_port;
                pub mod timesheet;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod admin_dashboard {
                pub mod handler;
                pub mod projection;
                pub mod inbound {
                    pub mod cli;
                }
            }
            pub mod review_time_entry {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod cli;
                }
            }
        }
    }
}

pub mod shell;
