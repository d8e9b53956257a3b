pub mod application {
    pub mod meal {
        pub mod delete;
        pub mod get;
        pub mod list;
        pub mod log;
        pub mod update;
    }
    pub mod pantry {
        pub mod add_item;
        pub mod delete;
        pub mod expiring;
        pub mod get_all;
    }
    pub mod recipe {
        pub mod create;
        pub mod create_from_meal;
        pub mod delete;
        pub mod get;
        pub mod list;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod food {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
    pub mod meal {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod delete;
            pub mod get;
            pub mod list;
            pub mod log;
            pub mod update;
        }
    }
    pub mod nutrition {
        pub mod model;
    }
    pub mod pantry {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod delete;
            pub mod expiring;
            pub mod get_all;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod create_from_meal;
            pub mod delete;
            pub mod get;
            pub mod list;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod pagination;
        pub mod value_objects;
    }
}
