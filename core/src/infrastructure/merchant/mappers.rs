use crate::domain::merchant::entities::{Area, Category, Image, Merchant};
use crate::entity::{
    area::Model as AreaModel, mb_merchant::Model as MerchantModel,
    mb_merchant_category::Model as CategoryModel, mb_merchant_image::Model as ImageModel,
};

impl From<MerchantModel> for Merchant {
    fn from(model: MerchantModel) -> Self {
        Merchant {
            id: model.mb_merchant_id,
            category_id: model.mb_category_id,
            area_id: model.area_id,
            name: model.name,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
            phone: model.phone,
            image: model.image,
            description: model.description,
            delivery: model.delivery,
            time_start: model.time_start,
            time_end: model.time_end,
            facebook: model.facebook,
            images: Vec::new(),
        }
    }
}

impl From<ImageModel> for Image {
    fn from(model: ImageModel) -> Self {
        Image {
            id: model.id,
            merchant_id: model.mb_merchant_id,
            image: model.image,
        }
    }
}

impl From<AreaModel> for Area {
    fn from(model: AreaModel) -> Self {
        Area {
            id: model.area_id,
            region_id: model.region_id,
            name: model.name,
            description: model.description,
            image: model.image,
        }
    }
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: model.mb_category_id,
            name: model.name,
            code: model.code,
            description: model.description,
            image: model.image,
        }
    }
}
