//! Paginated listings: all pokemon, and pokemon of one type.

use futures::future::join_all;
use log::debug;

use crate::{
    cli::types::{Language, PageRequest, PokemonRef},
    models::{PokemonInfo, PokemonListPage, TypeFilteredResult},
    pokeapi::{extract::get_type_list, PokeApiClient},
    PokedexError, Result,
};

use super::{info::get_pokemon_info, log_failure};

/// Resolve every reference concurrently, keeping input order.
async fn resolve_all(
    client: &PokeApiClient,
    refs: &[PokemonRef],
    language: &Language,
) -> Vec<PokemonInfo> {
    join_all(refs.iter().map(|r| get_pokemon_info(client, r, language))).await
}

/// One page of the "all pokemon" browser.
///
/// A single list fetch, then one full lookup per entry. Entries that fail
/// individually come back as the sentinel record.
pub async fn get_pokemon_all_list(
    client: &PokeApiClient,
    page: PageRequest,
    language: &Language,
) -> Result<PokemonListPage> {
    let listing = log_failure(
        "pokemon list page",
        client.fetch_pokemon_page(page).await,
    )?;
    debug!(
        "List page offset={} limit={} returned {} of {}",
        page.offset,
        page.limit,
        listing.results.len(),
        listing.count
    );

    let refs: Vec<PokemonRef> = listing
        .results
        .iter()
        .map(|entry| PokemonRef::Name(entry.name.clone()))
        .collect();

    Ok(PokemonListPage {
        pokemon_list: resolve_all(client, &refs, language).await,
        offset: page.offset,
        limit: page.limit,
        has_more: listing.next.is_some(),
    })
}

/// One page of pokemon having type `type_id`, plus every matching id.
pub async fn get_pokemon_type_list(
    client: &PokeApiClient,
    type_id: u32,
    page: PageRequest,
    language: &Language,
) -> Result<TypeFilteredResult> {
    let result = async {
        let payload = client.fetch_type(type_id).await?;
        let all_ids = get_type_list(&payload)?;

        let refs: Vec<PokemonRef> = page
            .window(&all_ids)
            .iter()
            .copied()
            .map(PokemonRef::Id)
            .collect();

        Ok::<_, PokedexError>(TypeFilteredResult {
            pokemon_list: resolve_all(client, &refs, language).await,
            pokemon_id_all_list: all_ids,
        })
    }
    .await;

    log_failure("pokemon type list", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dex::test_support::mount_bulbasaur_line;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn list_body(names: &[&str], next: Option<&str>) -> serde_json::Value {
        json!({
            "count": 1302,
            "next": next,
            "previous": null,
            "results": names.iter().map(|n| json!({
                "name": n,
                "url": "https://pokeapi.co/api/v2/pokemon/1/"
            })).collect::<Vec<_>>()
        })
    }

    #[tokio::test]
    async fn test_all_list_keeps_reference_order() {
        let server = MockServer::start().await;
        mount_bulbasaur_line(&server).await;

        let cycle = ["bulbasaur", "ivysaur", "venusaur"];
        let names: Vec<&str> = cycle.iter().cycle().take(20).copied().collect();

        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .and(query_param("offset", "0"))
            .and(query_param("limit", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body(
                &names,
                Some("https://pokeapi.co/api/v2/pokemon?offset=20&limit=20"),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let page = get_pokemon_all_list(&client, PageRequest::new(0, 20), &Language::default())
            .await
            .unwrap();

        assert_eq!(page.pokemon_list.len(), 20);
        let ids: Vec<u32> = page.pokemon_list.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = [1, 2, 3].iter().cycle().take(20).copied().collect();
        assert_eq!(ids, expected);
        assert!(page.has_more);
        assert_eq!((page.offset, page.limit), (0, 20));
    }

    #[tokio::test]
    async fn test_all_list_isolates_failed_entries() {
        let server = MockServer::start().await;
        mount_bulbasaur_line(&server).await;

        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(list_body(&["bulbasaur", "missingno", "venusaur"], None)),
            )
            .mount(&server)
            .await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let page = get_pokemon_all_list(&client, PageRequest::new(0, 3), &Language::default())
            .await
            .unwrap();

        assert_eq!(page.pokemon_list[0].id, 1);
        assert!(page.pokemon_list[1].is_unknown());
        assert_eq!(page.pokemon_list[2].id, 3);
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn test_all_list_page_failure_is_an_error() {
        let server = MockServer::start().await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let result =
            get_pokemon_all_list(&client, PageRequest::default(), &Language::default()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_type_list_window_and_full_ids() {
        let server = MockServer::start().await;
        mount_bulbasaur_line(&server).await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let result =
            get_pokemon_type_list(&client, 12, PageRequest::new(0, 2), &Language::default())
                .await
                .unwrap();

        assert_eq!(result.pokemon_id_all_list, vec![1, 2, 3, 10033]);
        assert_eq!(
            result.pokemon_list.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[tokio::test]
    async fn test_type_list_default_page_bounds() {
        let server = MockServer::start().await;
        mount_bulbasaur_line(&server).await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let result = get_pokemon_type_list(&client, 4, PageRequest::default(), &Language::default())
            .await
            .unwrap();

        assert!(result.pokemon_list.len() <= 20);
        assert!(result.pokemon_id_all_list.len() >= result.pokemon_list.len());
    }

    #[tokio::test]
    async fn test_type_list_offset_past_end_is_empty_page() {
        let server = MockServer::start().await;
        mount_bulbasaur_line(&server).await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let result =
            get_pokemon_type_list(&client, 12, PageRequest::new(40, 20), &Language::default())
                .await
                .unwrap();

        assert!(result.pokemon_list.is_empty());
        assert_eq!(result.pokemon_id_all_list.len(), 4);
    }

    #[tokio::test]
    async fn test_type_list_unknown_type_is_an_error() {
        let server = MockServer::start().await;
        mount_bulbasaur_line(&server).await;

        let client = PokeApiClient::new(server.uri()).unwrap();
        let result =
            get_pokemon_type_list(&client, 99, PageRequest::default(), &Language::default()).await;

        assert!(result.is_err());
    }
}
