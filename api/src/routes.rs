pub mod analysis {
    pub mod analysis_request;
    pub mod analysis_response;
    pub mod analysis_route;
}

pub mod connectivity {
    pub mod connectivity_response;
    pub mod connectivity_route;
}

pub mod dashboard {
    pub mod dashboard_response;
    pub mod dashboard_route;
}

pub mod demo_mode {
    pub mod demo_mode_response;
    pub mod demo_mode_route;
}

pub mod search {
    pub mod search_request;
    pub mod search_response;
    pub mod search_route;
}

pub mod state {
    pub mod state_route;
}
