pub mod responses;

pub use responses::{
    DeleteResponseBody, GenerateRequest, GenerateResponseBody, GetResponseBody,
    ListResponsesBody, ResponseData, UpdateRequest, UpdateResponseBody,
};
